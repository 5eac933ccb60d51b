//! `syncgen run` — one extract-and-regenerate pass.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use syncgen_sync::{run_pass, PassResult, WriteOutcome};

/// Arguments for `syncgen run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Workspace root containing ansvia-vscode.yaml (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a machine-readable pass summary instead of the human report.
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let root = super::resolve_root(self.root)?;
        let config = super::load_config(&root)?;

        let result = run_pass(&root, &config, self.dry_run).context("sync pass failed")?;

        if self.json {
            print_json(&result, self.dry_run)?;
        } else {
            print_results(&result, self.dry_run);
        }

        if result.has_failures() {
            bail!(
                "{} target(s) could not be written",
                result.failed().count()
            );
        }
        Ok(())
    }
}

fn print_results(result: &PassResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = result.writes.iter().filter(|w| !w.is_failure()).count();
    let failed = result.failed().count();

    println!("{prefix}✓ error codes synced ({written} written, {failed} failed)");
    for outcome in &result.writes {
        match outcome {
            WriteOutcome::Written { path } => {
                println!("  {}  {}", "✎".green(), path.display());
            }
            WriteOutcome::WouldWrite { path } => {
                println!("  {}  {}", "~".yellow(), path.display());
            }
            WriteOutcome::Failed { path, message } => {
                eprintln!("  {}  {} — {message}", "✗".red(), path.display());
            }
        }
    }
}

fn print_json(result: &PassResult, dry_run: bool) -> Result<()> {
    let writes: Vec<_> = result
        .writes
        .iter()
        .map(|outcome| match outcome {
            WriteOutcome::Written { path } => json!({
                "path": path.display().to_string(),
                "status": "written",
            }),
            WriteOutcome::WouldWrite { path } => json!({
                "path": path.display().to_string(),
                "status": "would_write",
            }),
            WriteOutcome::Failed { path, message } => json!({
                "path": path.display().to_string(),
                "status": "failed",
                "error": message,
            }),
        })
        .collect();

    let payload = json!({
        "dry_run": dry_run,
        "failed": result.failed().count(),
        "writes": writes,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
