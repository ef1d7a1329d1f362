use std::future::Future;

use tagview_types::Post;

use crate::Result;

/// A place posts can be pulled from in one shot.
///
/// Implementations issue a single request and either return the whole batch
/// or an error; they never retry.
pub trait PostSource: Send + Sync {
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;
}

/// Fetch the batch, turning any failure into an empty batch.
///
/// This is the only place source errors are observed; they are logged and
/// the viewer continues with nothing to show.
pub async fn load_posts<S: PostSource>(source: &S) -> Vec<Post> {
    match source.fetch_posts().await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch posts, continuing with an empty batch");
            Vec::new()
        }
    }
}
