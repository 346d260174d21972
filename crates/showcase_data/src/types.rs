use std::io;
use std::path::PathBuf;

use showcase_core::PostId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("post {id} has invalid link {url:?}: {source}")]
    InvalidUrl {
        id: PostId,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("post id {0} appears more than once")]
    DuplicateId(PostId),
}
