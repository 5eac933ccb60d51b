//! `syncgen watch` — regenerate on every save of the source file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for `syncgen watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Workspace root containing ansvia-vscode.yaml (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl WatchArgs {
    pub fn run(self) -> Result<()> {
        init_tracing();

        let root = super::resolve_root(self.root)?;
        let config = super::load_config(&root)?;

        syncgen_watch::watch(&root, &config)
            .with_context(|| format!("watcher failed for {}", root.display()))
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
