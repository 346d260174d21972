use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use showcase_core::{Post, PostId, PostLink};
use showcase_logging::{showcase_debug, showcase_info};
use url::Url;

use crate::id::derived_post_id;
use crate::LoadError;

/// One catalog record. Accepts both shapes the showcase has shipped:
/// `{id, title, url, description, category, date}` and
/// `{id?, title, linkedinUrl, description, tags?, date}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    #[serde(default)]
    id: Option<RawId>,
    title: String,
    #[serde(default)]
    description: String,
    date: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    linkedin_url: Option<String>,
    #[serde(default)]
    links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawLink {
    label: String,
    url: String,
}

/// Reads and parses a JSON catalog file.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = parse_posts(&text)?;
    showcase_info!("Loaded {} posts from {:?}", posts.len(), path);
    Ok(posts)
}

/// Parses a JSON array of post records, preserving their order.
pub fn parse_posts(text: &str) -> Result<Vec<Post>, LoadError> {
    let raw: Vec<RawPost> = serde_json::from_str(text)?;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut posts = Vec::with_capacity(raw.len());
    for record in raw {
        let post = into_post(record)?;
        if !seen.insert(post.id.clone()) {
            return Err(LoadError::DuplicateId(post.id));
        }
        posts.push(post);
    }
    Ok(posts)
}

fn into_post(raw: RawPost) -> Result<Post, LoadError> {
    let id = match raw.id {
        Some(RawId::Number(n)) => PostId::from(n),
        Some(RawId::Text(text)) => PostId::from(text),
        None => {
            let id = derived_post_id(&raw.title, &raw.date);
            showcase_debug!("Post {:?} has no id; using {}", raw.title, id);
            id
        }
    };

    let mut post = Post::new(id, raw.title, raw.description, raw.date).with_tags(raw.tags);
    post.category = raw.category.filter(|category| !category.trim().is_empty());

    let primary = [("post", raw.url), ("LinkedIn", raw.linkedin_url)]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label.to_owned(), url)));
    let extra = raw.links.into_iter().map(|link| (link.label, link.url));
    for (label, url) in primary.chain(extra) {
        let parsed = Url::parse(&url).map_err(|source| LoadError::InvalidUrl {
            id: post.id.clone(),
            url: url.clone(),
            source,
        })?;
        post.links.push(PostLink { label, url: parsed });
    }
    Ok(post)
}
