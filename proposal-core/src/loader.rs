//! Context file loading.
//!
//! The format follows the file extension: `.json` is parsed with serde_json,
//! `.yaml`/`.yml` and anything else with serde_yaml.

use std::path::{Path, PathBuf};

use crate::error::{io_err, CoreError};
use crate::types::ProposalContext;

/// On-disk encoding of a context file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFormat {
    Yaml,
    Json,
}

impl ContextFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ContextFormat::Json,
            _ => ContextFormat::Yaml,
        }
    }
}

/// Parse context text. `origin` is only used to annotate errors.
pub fn parse_context(
    text: &str,
    format: ContextFormat,
    origin: &Path,
) -> Result<ProposalContext, CoreError> {
    match format {
        ContextFormat::Json => serde_json::from_str(text).map_err(|source| CoreError::ParseJson {
            path: origin.to_path_buf(),
            source,
        }),
        ContextFormat::Yaml => serde_yaml::from_str(text).map_err(|source| CoreError::Parse {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse a context file.
pub fn load_context(path: impl AsRef<Path>) -> Result<ProposalContext, CoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CoreError::NotFound {
            path: PathBuf::from(path),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let ctx = parse_context(&text, ContextFormat::from_path(path), path)?;
    tracing::debug!(
        "loaded context for '{}' from {}",
        ctx.company_name,
        path.display()
    );
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_selects_format() {
        assert_eq!(ContextFormat::from_path(Path::new("a.json")), ContextFormat::Json);
        assert_eq!(ContextFormat::from_path(Path::new("a.JSON")), ContextFormat::Json);
        assert_eq!(ContextFormat::from_path(Path::new("a.yml")), ContextFormat::Yaml);
        assert_eq!(ContextFormat::from_path(Path::new("context")), ContextFormat::Yaml);
    }

    #[test]
    fn parse_json_context() {
        let ctx = parse_context(
            r#"{"company_name": "Acme Corp", "case_studies": ["Retail: 30% cost cut"]}"#,
            ContextFormat::Json,
            Path::new("inline.json"),
        )
        .expect("parse");
        assert_eq!(ctx.company_name.0, "Acme Corp");
        assert_eq!(ctx.case_studies, vec!["Retail: 30% cost cut".to_string()]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let ctx = parse_context(
            "company_name: Acme\nmarkdown_content: ignored\n",
            ContextFormat::Yaml,
            Path::new("inline.yaml"),
        )
        .expect("parse");
        assert_eq!(ctx.company_name.0, "Acme");
    }

    #[test]
    fn non_mapping_is_parse_error() {
        let err = parse_context("- a\n- b\n", ContextFormat::Yaml, Path::new("list.yaml"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("list.yaml"));
    }
}
