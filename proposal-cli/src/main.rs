//! Proposal — render client proposal documents from a context file.
//!
//! # Usage
//!
//! ```text
//! proposal render <context> [--out <file> | --out-dir <dir> | --stdout] [--dry-run] [--strict]
//! proposal check <context> [--json]
//! proposal diff <context> <existing>
//! proposal template [--export <dir>] [--force]
//! ```
//!
//! Every subcommand accepts `--config <file>` (default `~/.proposal/config.yaml`).

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    check::CheckArgs, diff::DiffArgs, render::RenderArgs, template::TemplateArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "proposal",
    version,
    about = "Render client proposal documents from YAML or JSON context files",
    long_about = None,
)]
struct Cli {
    /// Settings file to use instead of ~/.proposal/config.yaml.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a proposal and write it to disk (or stdout).
    Render(RenderArgs),

    /// Report which required context fields are missing.
    Check(CheckArgs),

    /// Show a unified diff between a fresh render and an existing document.
    Diff(DiffArgs),

    /// Print or export the built-in proposal template.
    Template(TemplateArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Render(args) => args.run(config),
        Commands::Check(args) => args.run(),
        Commands::Diff(args) => args.run(config),
        Commands::Template(args) => args.run(),
    }
}

/// Logs go to stderr so `render --stdout` output stays clean.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
