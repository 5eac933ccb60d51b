//! Error types for syncgen-watch.

use thiserror::Error;

/// Errors that terminate the watch loop.
///
/// A failing sync pass is not fatal — it is logged and the loop keeps
/// running. Only watcher setup and registration problems end up here.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),
}
