//! Unified diff between a fresh render and a previously written proposal.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use proposal_core::types::ProposalContext;
use proposal_renderer::Renderer;

use crate::error::{io_err, OutputError};

/// A single rendered file diff. `unified_diff` is empty when nothing changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

impl FileDiff {
    pub fn is_empty(&self) -> bool {
        self.unified_diff.is_empty()
    }
}

/// Render `proposal` and compare it with the document at `existing`.
///
/// No files are written. A missing `existing` file diffs against empty text.
pub fn diff_proposal(
    renderer: &Renderer,
    proposal: &ProposalContext,
    existing: &Path,
) -> Result<FileDiff, OutputError> {
    let rendered = normalize_line_endings(&renderer.render(proposal)?);
    let current = read_existing_or_empty(existing)?;

    if current == rendered {
        tracing::debug!("no differences for {}", existing.display());
        return Ok(FileDiff {
            path: existing.to_path_buf(),
            unified_diff: String::new(),
        });
    }

    let name = existing
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| existing.display().to_string());
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&current, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(FileDiff {
        path: existing.to_path_buf(),
        unified_diff: unified,
    })
}

fn read_existing_or_empty(path: &Path) -> Result<String, OutputError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(io_err(path, e)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
