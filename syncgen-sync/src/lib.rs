//! # syncgen-sync
//!
//! One-shot sync pass orchestration.
//!
//! Call [`run_pass`] to read the configured source file, extract the
//! `ErrorCode` enum, and write one rendered declaration file per configured
//! target. [`render_targets`] exposes the pure extract-and-render half for
//! callers that want the planned outputs without touching the filesystem.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use pipeline::{render_targets, run_pass, PassResult};
pub use writer::WriteOutcome;
