//! User settings.
//!
//! # Storage layout
//!
//! ```text
//! ~/.proposal/
//!   config.yaml     (optional — defaults apply when absent)
//! ```
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, CoreError};

/// Default `strftime` format for the auto-filled date, e.g. `October 17, 2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// Settings read from `config.yaml`. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory of `*.tera` files overriding the embedded template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Where `proposal render` writes when no explicit output is given.
    pub output_dir: PathBuf,
    /// `strftime` format used when a context leaves `date` empty.
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            template_dir: None,
            output_dir: PathBuf::from("output").join("proposals"),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// `<home>/.proposal/config.yaml` — pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".proposal").join("config.yaml")
}

/// Load settings under `home`, or defaults when no config file exists.
pub fn load_at(home: &Path) -> Result<Settings, CoreError> {
    let path = settings_path_at(home);
    if !path.exists() {
        tracing::debug!("no settings at {}; using defaults", path.display());
        return Ok(Settings::default());
    }
    load_from(&path)
}

/// [`load_at`] for the current user's home directory. The CLI uses this
/// when no `--config` is given.
pub fn load() -> Result<Settings, CoreError> {
    load_at(&home()?)
}

/// Load settings from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<Settings, CoreError> {
    if !path.exists() {
        return Err(CoreError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    // An empty file parses as YAML null; treat it as "all defaults".
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| CoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn home() -> Result<PathBuf, CoreError> {
    dirs::home_dir().ok_or(CoreError::HomeNotFound)
}
