//! `proposal template [--export <dir>]` — start a template override.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use proposal_output::{atomic_write, WriteResult};
use proposal_renderer::{default_template_source, PROPOSAL_TEMPLATE};

/// Arguments for `proposal template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the built-in template into this directory as `proposal.md.tera`.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Replace an existing, different override file.
    #[arg(long, requires = "export")]
    pub force: bool,
}

impl TemplateArgs {
    pub fn run(self) -> Result<()> {
        let Some(dir) = self.export else {
            print!("{}", default_template_source());
            return Ok(());
        };

        let path = dir.join(PROPOSAL_TEMPLATE);
        let source = default_template_source();
        if path.exists() && !self.force {
            let current = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read '{}'", path.display()))?;
            if current != source {
                bail!(
                    "'{}' already exists and differs from the built-in template; pass --force to replace it",
                    path.display()
                );
            }
        }

        let result = atomic_write(&path, source, false)
            .with_context(|| format!("failed to export template to '{}'", path.display()))?;
        match result {
            WriteResult::Unchanged { .. } => {
                println!("✓ Template already up to date: {}", result.path().display())
            }
            _ => println!("✓ Exported template: {}", result.path().display()),
        }
        println!("  Pass --template-dir {} to render with it.", dir.display());
        Ok(())
    }
}
