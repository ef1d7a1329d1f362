use std::sync::mpsc::{self, Receiver};
use std::thread;

use tagview_providers::{PostSource, load_posts};
use tagview_types::Post;

/// Run the one startup fetch on a background thread.
///
/// The batch (empty on failure) arrives on the returned receiver exactly once.
/// Dropping the receiver before then simply discards the result.
pub fn spawn_initial_fetch<S>(source: S) -> Receiver<Vec<Post>>
where
    S: PostSource + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let posts = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(load_posts(&source)),
            Err(err) => {
                tracing::error!(error = %err, "failed to start fetch runtime");
                Vec::new()
            }
        };

        if tx.send(posts).is_err() {
            tracing::debug!("viewer closed before the fetch finished");
        }
    });

    rx
}
