//! Error types for syncgen-sync.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an entire sync pass.
///
/// Per-target write failures are not here — they are isolated in
/// [`crate::WriteOutcome::Failed`] so one bad output path never blocks the
/// remaining targets.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The configured source file is missing or unreadable. The pass aborts
    /// before any output is written.
    #[error("cannot read source file {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
