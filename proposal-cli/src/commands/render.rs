//! `proposal render` — render a context and write the document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use proposal_core::load_context;
use proposal_output::{atomic_write, OutputTarget, WriteResult};

use super::{build_renderer, load_settings};

/// Arguments for `proposal render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Context file (YAML or JSON).
    pub context: PathBuf,

    /// Write to exactly this file.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["out_dir", "stdout"])]
    pub out: Option<PathBuf>,

    /// Write `proposal_<company>_<timestamp>.md` into this directory
    /// (default: `output_dir` from settings).
    #[arg(long, value_name = "DIR", conflicts_with = "stdout")]
    pub out_dir: Option<PathBuf>,

    /// Print the rendered document instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Show what would be written without writing any files.
    #[arg(long, conflicts_with = "stdout")]
    pub dry_run: bool,

    /// Fail instead of rendering blank required fields as empty text.
    #[arg(long)]
    pub strict: bool,

    /// Directory of `*.tera` overrides (takes precedence over settings).
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Date text to print instead of the context's (or today's) date.
    #[arg(long)]
    pub date: Option<String>,

    /// Case-study line; repeat to replace the context's list.
    #[arg(long = "case-study", value_name = "TEXT")]
    pub case_studies: Vec<String>,
}

impl RenderArgs {
    pub fn run(self, config: Option<&Path>) -> Result<()> {
        let settings = load_settings(config)?;
        let renderer = build_renderer(&settings, self.template_dir.as_deref())?;

        let mut proposal = load_context(&self.context)
            .with_context(|| format!("failed to load context '{}'", self.context.display()))?;
        if let Some(date) = self.date {
            proposal.date = date;
        }
        if !self.case_studies.is_empty() {
            proposal.case_studies = self.case_studies;
        }

        let rendered = if self.strict {
            renderer.render_strict(&proposal)
        } else {
            renderer.render(&proposal)
        }
        .with_context(|| format!("failed to render proposal for '{}'", proposal.company_name))?;

        if self.stdout {
            print!("{rendered}");
            return Ok(());
        }

        let target = match (self.out, self.out_dir) {
            (Some(file), _) => OutputTarget::File(file),
            (None, Some(dir)) => OutputTarget::Directory(dir),
            (None, None) => OutputTarget::Directory(settings.output_dir),
        };
        let path = target.resolve(&proposal, Local::now().naive_local());
        let result = atomic_write(&path, &rendered, self.dry_run)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        print_result(&proposal.company_name.0, &result);
        Ok(())
    }
}

fn print_result(company: &str, result: &WriteResult) {
    match result {
        WriteResult::Written { path } => {
            println!("✓ Proposal for '{company}' written");
            println!("  ✎  {}", path.display());
        }
        WriteResult::WouldWrite { path } => {
            println!("[dry-run] ✓ Proposal for '{company}' would be written");
            println!("  ~  {}", path.display());
        }
        WriteResult::Unchanged { path } => {
            println!("✓ Proposal for '{company}' — nothing to do");
            println!("  ·  {}", path.display());
        }
    }
}
