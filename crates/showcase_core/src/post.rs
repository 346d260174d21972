use std::fmt;

use url::Url;

/// Opaque post identifier, unique within a source sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// A named outbound link attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    pub label: String,
    pub url: Url,
}

/// One immutable content record of the source sequence.
///
/// `date` keeps the raw text as supplied; it is parsed into an instant by
/// the view-model when the source is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// First entry is the primary link.
    pub links: Vec<PostLink>,
}

impl Post {
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date: date.into(),
            category: None,
            tags: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: Url) -> Self {
        self.links.push(PostLink {
            label: label.into(),
            url,
        });
        self
    }

    pub fn primary_link(&self) -> Option<&PostLink> {
        self.links.first()
    }
}
