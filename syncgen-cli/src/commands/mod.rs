//! CLI subcommands.

pub mod run;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use syncgen_core::{config, SyncGenConfig};

/// Resolve the workspace root: `--root` if given, else the current directory.
pub(crate) fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("could not determine current directory"),
    }
}

/// Load the `sync_gen.error_code` configuration or fail with a user-facing
/// message when the feature is not configured.
pub(crate) fn load_config(root: &Path) -> Result<SyncGenConfig> {
    config::load_at(root)
        .with_context(|| format!("could not load {}", root.join(config::CONFIG_FILE).display()))?
        .with_context(|| {
            format!(
                "no sync_gen.error_code section found in {}",
                root.join(config::CONFIG_FILE).display()
            )
        })
}
