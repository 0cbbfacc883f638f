//! Error types for proposal-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, render, context conversion).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// A template references a variable that cannot be filled with an
    /// empty value (e.g. a dotted path such as `client.email`).
    #[error("template variable `{0}` is not defined in the proposal context")]
    UndefinedVariable(String),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// The configured date format is not a valid strftime string for a date.
    #[error("invalid date format '{0}'")]
    DateFormat(String),

    /// Strict rendering refused a context with blank required fields.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
