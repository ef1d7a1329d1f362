use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A single record pulled from the remote post source.
///
/// Posts are read-only once fetched; every derived view borrows or clones them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    pub fn has_any_tag(&self, wanted: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|tag| wanted.contains(tag))
    }
}

/// Envelope returned by the posts endpoint.
///
/// The endpoint also reports `total`, `skip` and `limit`; only the records are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

impl PostsResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Distinct tags observed across one post batch, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVocabulary(BTreeSet<String>);

impl TagVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tag at a display position (sorted order)
    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }
}

impl<S: Into<String>> FromIterator<S> for TagVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
