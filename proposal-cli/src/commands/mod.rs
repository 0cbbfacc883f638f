pub mod check;
pub mod diff;
pub mod render;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};

use proposal_core::{settings, Settings};
use proposal_renderer::Renderer;

/// Settings from `--config`, else `~/.proposal/config.yaml`, else defaults.
pub(crate) fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => settings::load_from(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display())),
        None => settings::load().context("failed to load ~/.proposal/config.yaml"),
    }
}

/// Renderer for `settings`, with `--template-dir` taking precedence.
pub(crate) fn build_renderer(settings: &Settings, template_dir: Option<&Path>) -> Result<Renderer> {
    let dir = template_dir.or(settings.template_dir.as_deref());
    tracing::debug!("template dir: {:?}, date format: {}", dir, settings.date_format);
    let renderer = Renderer::with_templates(dir).with_context(|| match dir {
        Some(d) => format!("failed to load templates from '{}'", d.display()),
        None => "failed to load built-in templates".to_string(),
    })?;
    Ok(renderer.date_format(settings.date_format.clone()))
}
