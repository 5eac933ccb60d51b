//! Syncgen core library — domain types, configuration loading, errors.
//!
//! Public API surface:
//! - [`types`] — enum data model and output target specs
//! - [`config`] — `ansvia-vscode.yaml` loading
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::SyncGenConfig;
pub use error::ConfigError;
pub use types::{EnumDefinition, EnumEntry, TargetKind, TargetSpec};
