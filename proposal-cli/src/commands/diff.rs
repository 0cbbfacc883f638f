//! `proposal diff <context> <existing>` — show what a re-render would change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use proposal_core::load_context;
use proposal_output::diff_proposal;

use super::{build_renderer, load_settings};

/// Arguments for `proposal diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Context file (YAML or JSON).
    pub context: PathBuf,

    /// Previously rendered proposal to compare against.
    pub existing: PathBuf,

    /// Directory of `*.tera` overrides (takes precedence over settings).
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self, config: Option<&Path>) -> Result<()> {
        let settings = load_settings(config)?;
        let renderer = build_renderer(&settings, self.template_dir.as_deref())?;
        let proposal = load_context(&self.context)
            .with_context(|| format!("failed to load context '{}'", self.context.display()))?;

        let diff = diff_proposal(&renderer, &proposal, &self.existing)
            .with_context(|| format!("diff failed for '{}'", self.existing.display()))?;

        if diff.is_empty() {
            println!("No differences for '{}'.", diff.path.display());
            return Ok(());
        }

        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
