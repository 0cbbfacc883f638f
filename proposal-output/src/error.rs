//! Error types for proposal-output.

use std::path::PathBuf;

use thiserror::Error;

use proposal_renderer::RenderError;

/// All errors that can arise while writing or diffing proposals.
#[derive(Debug, Error)]
pub enum OutputError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`OutputError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> OutputError {
    OutputError::Io {
        path: path.into(),
        source,
    }
}
