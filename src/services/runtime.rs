//! Tokio Runtime
//!
//! Host fetches and subscriptions are async, while the card state is owned by a
//! single thread that drains its mailbox. Loader futures run on one
//! process-wide tokio runtime and report back through the mailbox.
//!
//! ```text
//! TimelineCard::attach()
//!       │
//!       ▼
//! spawn_named_in_tokio(load_resources(..))
//!       │
//!       ▼
//! CardMessage ──► mailbox ──► TimelineCard::process_pending()
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
#[allow(clippy::expect_used)]
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached loader task; the name shows up in debug logs
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}

/// Drive a future to completion on the shared runtime (tests and tooling).
/// Must not be called from a runtime thread.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
