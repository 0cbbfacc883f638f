//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! The proposal template is embedded at compile time. A user template
//! directory may override it: any `*.tera` file whose normalised relative
//! path matches an embedded name (e.g. `proposal.md.tera`) replaces it.
//!
//! Template sources are LF-normalised when loaded. Rendered values are
//! inserted untouched. An override that references a plain variable the
//! context does not define renders it as empty text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use proposal_core::types::ProposalContext;
use proposal_core::settings::DEFAULT_DATE_FORMAT;

use crate::context::TemplateContext;
use crate::error::RenderError;

/// Name of the proposal document template.
pub const PROPOSAL_TEMPLATE: &str = "proposal.md.tera";

/// Upper bound on distinct undefined variables filled in during one render.
const MAX_UNDEFINED_VARIABLES: usize = 32;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[(
    PROPOSAL_TEMPLATE,
    include_str!("templates/proposal.md.tera"),
)];

/// Source text of the embedded proposal template.
pub fn default_template_source() -> &'static str {
    TPLS.iter()
        .find(|(name, _)| *name == PROPOSAL_TEMPLATE)
        .map(|(_, src)| *src)
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        tracing::debug!("template dir {} does not exist; using embedded", dir.display());
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path
            .strip_prefix(dir)
            .unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("template override '{}' from {}", name, path.display());
        templates.push((name, contents));
    }
    Ok(templates)
}

fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

/// Name of the variable behind a Tera "Variable `x` not found" failure,
/// searched through the error's source chain.
fn undefined_variable(err: &tera::Error) -> Option<String> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        let msg = e.to_string();
        if let Some((name, tail)) = msg
            .strip_prefix("Variable `")
            .and_then(|rest| rest.split_once('`'))
        {
            if tail.starts_with(" not found") {
                return Some(name.to_string());
            }
        }
        current = e.source();
    }
    None
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            normalize_line_endings(content),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, normalize_line_endings(&content));
        }
    }

    let mut tera = Tera::default();
    // Output is Markdown; never HTML-escape inserted prose.
    tera.autoescape_on(vec![]);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded defaults.
/// Template names are normalised to lowercase and relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render template `name` with the supplied context.
    ///
    /// A plain variable missing from the context renders as empty text and
    /// is logged. Dotted or indexed lookups that cannot be satisfied fail
    /// with [`RenderError::UndefinedVariable`].
    pub fn render(&self, ctx: &TemplateContext, name: &str) -> Result<String, RenderError> {
        let mut tera_ctx = ctx.to_tera_context()?;
        let mut filled: Vec<String> = Vec::new();
        loop {
            let err = match self.tera.render(name, &tera_ctx) {
                Ok(content) => return Ok(content),
                Err(err) => err,
            };
            let Some(var) = undefined_variable(&err) else {
                return Err(err.into());
            };
            let plain = var.chars().all(|c| c.is_alphanumeric() || c == '_');
            if !plain || filled.contains(&var) || filled.len() >= MAX_UNDEFINED_VARIABLES {
                return Err(RenderError::UndefinedVariable(var));
            }
            tracing::warn!("template '{}' uses undefined variable '{}'; rendering it empty", name, var);
            tera_ctx.insert(var.as_str(), "");
            filled.push(var);
        }
    }

    /// Names of all loaded templates, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(str::to_string).collect();
        names.sort();
        names
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders proposal documents. Create once and reuse across contexts.
pub struct Renderer {
    engine: TemplateEngine,
    date_format: String,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_templates(None)
    }

    /// Construct a [`Renderer`] honouring overrides in `user_template_dir`.
    pub fn with_templates(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(user_template_dir)?,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        })
    }

    /// Use `format` (strftime) when filling an empty `date`.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Render the proposal for `proposal`.
    ///
    /// Blank required fields render as empty text; each one is logged.
    pub fn render(&self, proposal: &ProposalContext) -> Result<String, RenderError> {
        for field in proposal.missing_fields() {
            tracing::warn!(
                "'{}' has no value; rendering it empty for '{}'",
                field,
                proposal.company_name
            );
        }
        let ctx = TemplateContext::from_proposal(proposal, &self.date_format)?;
        self.render_with_context(&ctx)
    }

    /// Like [`render`](Self::render) but refuses contexts with blank required fields.
    pub fn render_strict(&self, proposal: &ProposalContext) -> Result<String, RenderError> {
        let missing = proposal.missing_fields();
        if !missing.is_empty() {
            return Err(RenderError::MissingFields(missing));
        }
        self.render(proposal)
    }

    /// Render using a caller-provided [`TemplateContext`].
    pub fn render_with_context(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        self.engine.render(ctx, PROPOSAL_TEMPLATE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
