//! Showcase data: turns post catalogs into the immutable source sequence
//! consumed by `showcase_core`.
mod bundled;
mod catalog;
mod id;
mod types;

pub use bundled::bundled_posts;
pub use catalog::{load_posts, parse_posts};
pub use id::derived_post_id;
pub use types::LoadError;
