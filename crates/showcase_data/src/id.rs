use sha2::{Digest, Sha256};
use showcase_core::PostId;

/// Stable id for records that carry none: `post-{short_hash(title, date)}`.
pub fn derived_post_id(title: &str, date: &str) -> PostId {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update([0u8]);
    hasher.update(date.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(5 + 8);
    hex.push_str("post-");
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    PostId::from(hex)
}
