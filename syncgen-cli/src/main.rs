//! Syncgen — cross-language error-code synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! syncgen run [--root <dir>] [--dry-run] [--json]
//! syncgen watch [--root <dir>]
//! ```
//!
//! Both subcommands read `<root>/ansvia-vscode.yaml` for the
//! `sync_gen.error_code` section; `--root` defaults to the current directory.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run::RunArgs, watch::WatchArgs};

#[derive(Parser, Debug)]
#[command(
    name = "syncgen",
    version,
    about = "Keep error-code constants in sync across JS and Dart codebases",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one sync pass: extract the enum and regenerate every target.
    Run(RunArgs),

    /// Watch the source file and re-run the sync pass on every save.
    Watch(WatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Watch(args) => args.run(),
    }
}
