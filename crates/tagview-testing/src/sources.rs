//! In-memory post sources.

use std::sync::atomic::{AtomicUsize, Ordering};

use tagview_providers::{Error, PostSource, Result};
use tagview_types::Post;

/// Always returns the same batch and counts how often it was asked.
#[derive(Debug, Default)]
pub struct StaticSource {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostSource for StaticSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

/// Fails every fetch with a non-success status.
#[derive(Debug, Clone, Copy)]
pub struct FailingSource {
    pub status: u16,
}

impl Default for FailingSource {
    fn default() -> Self {
        Self { status: 503 }
    }
}

impl PostSource for FailingSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        Err(Error::Status(self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::abc_posts;

    #[tokio::test]
    async fn test_static_source_counts_calls() {
        let source = StaticSource::new(abc_posts());
        assert_eq!(source.fetch_posts().await.unwrap().len(), 3);
        assert_eq!(source.fetch_posts().await.unwrap().len(), 3);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_source_reports_status() {
        let err = FailingSource { status: 404 }.fetch_posts().await.unwrap_err();
        assert!(matches!(err, Error::Status(404)));
    }
}
