//! # syncgen-watch
//!
//! Save-event trigger for the sync engine.
//!
//! [`watch`] blocks the calling thread: it registers a filesystem watcher on
//! the configured source file's directory and runs one full sync pass for
//! every create/modify event on that file. Events for other files in the
//! same directory are ignored.
//!
//! There is no debouncing: rapid consecutive saves each trigger an
//! independent pass. Passes are short-lived, carry no state between runs,
//! and run to completion before the next event is handled.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};

use syncgen_core::SyncGenConfig;
use syncgen_sync::{run_pass, WriteOutcome};

pub use error::WatchError;

/// Watch `root/<source>` and run a sync pass on every save.
///
/// Returns only when the watcher channel closes or registration fails; pass
/// failures are reported through tracing and do not end the loop.
pub fn watch(root: &Path, config: &SyncGenConfig) -> Result<(), WatchError> {
    let source_path = root.join(&config.source);
    let watch_dir = source_path.parent().unwrap_or(root).to_path_buf();
    // Canonicalize so that event paths (which arrive as real paths, e.g.
    // /private/var/... on macOS) match the comparison below.
    let watch_dir = fs::canonicalize(&watch_dir).unwrap_or(watch_dir);

    let (event_tx, event_rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = recommended_watcher(event_tx)?;
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    tracing::info!("watching {} for saves", source_path.display());

    for event in event_rx {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!("watcher event error: {err}");
                continue;
            }
        };
        if !is_relevant_event_kind(&event.kind) {
            continue;
        }
        for path in &event.paths {
            if !is_source_path(path, &source_path) {
                continue;
            }
            run_triggered_pass(root, config);
        }
    }

    Ok(())
}

fn run_triggered_pass(root: &Path, config: &SyncGenConfig) {
    match run_pass(root, config, false) {
        Ok(result) => {
            let mut written = 0usize;
            let mut failed = 0usize;
            for outcome in &result.writes {
                match outcome {
                    WriteOutcome::Written { .. } | WriteOutcome::WouldWrite { .. } => written += 1,
                    WriteOutcome::Failed { path, message } => {
                        failed += 1;
                        tracing::error!("target write failed for {}: {message}", path.display());
                    }
                }
            }
            tracing::info!("save-triggered sync complete ({written} written, {failed} failed)");
        }
        Err(err) => {
            tracing::error!("save-triggered sync failed: {err}");
        }
    }
}

fn is_relevant_event_kind(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// Does this event path refer to the configured source file?
///
/// Compared in canonical form where possible; a path that no longer resolves
/// (e.g. an editor's delete-and-rename save) falls back to the literal path.
fn is_source_path(event_path: &Path, source_path: &Path) -> bool {
    let event_real = canonical_or_self(event_path);
    let source_real = canonical_or_self(source_path);
    event_real == source_real
}

fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
