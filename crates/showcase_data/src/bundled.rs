use showcase_core::Post;

use crate::catalog::parse_posts;
use crate::LoadError;

const BUNDLED_CATALOG: &str = include_str!("../data/posts.json");

/// The catalog shipped with the binary, used when no file is given.
pub fn bundled_posts() -> Result<Vec<Post>, LoadError> {
    parse_posts(BUNDLED_CATALOG)
}
