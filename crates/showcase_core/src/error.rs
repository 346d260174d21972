use thiserror::Error;

use crate::PostId;

/// Bad construction parameters. Construction fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size must be positive")]
    ZeroPageSize,
    #[error("duplicate post id {0}")]
    DuplicatePostId(PostId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Recoverable: the sort change is rejected and state is unchanged.
    #[error("invalid sort direction {0:?} (expected \"latest\" or \"oldest\")")]
    InvalidSortDirection(String),
    /// Recoverable: only raised under `FilterPolicy::Strict`.
    #[error("unknown category {0:?}")]
    InvalidFilterValue(String),
    /// Only raised under `DatePolicy::Reject`.
    #[error("post {id} has unparseable date {raw:?}")]
    InvalidDateFormat { id: PostId, raw: String },
}
