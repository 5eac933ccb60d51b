//! Per-target output writer.
//!
//! Writes overwrite the destination unconditionally — no merge, no backup,
//! no content comparison against a previous run. Parent directories are not
//! created: a missing directory is a per-target failure, the same as a
//! permission problem.

use std::path::{Path, PathBuf};

/// Outcome of an individual target write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written (created or overwritten).
    Written { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
    /// The write failed; remaining targets are still attempted.
    Failed { path: PathBuf, message: String },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path }
            | WriteOutcome::WouldWrite { path }
            | WriteOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, WriteOutcome::Failed { .. })
    }
}

/// Write one rendered target file.
pub(crate) fn write_target(path: &Path, content: &str, dry_run: bool) -> WriteOutcome {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return WriteOutcome::WouldWrite {
            path: path.to_path_buf(),
        };
    }

    match std::fs::write(path, content) {
        Ok(()) => {
            tracing::info!("wrote: {}", path.display());
            WriteOutcome::Written {
                path: path.to_path_buf(),
            }
        }
        Err(e) => {
            tracing::error!("write failed for {}: {e}", path.display());
            WriteOutcome::Failed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
