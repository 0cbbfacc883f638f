//! Atomic writer for rendered proposals.
//!
//! ## `atomic_write` protocol
//!
//! 1. Compare with the current file content → skip if identical.
//! 2. Write to `<path>.proposal.tmp`.
//! 3. Rename to final path (atomic on POSIX).
//!
//! Content is written byte-for-byte; rendered values keep their line endings.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use proposal_core::types::ProposalContext;

use crate::error::{io_err, OutputError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// Where a rendered proposal goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Exactly this file.
    File(PathBuf),
    /// A directory; the file name comes from [`default_file_name`].
    Directory(PathBuf),
}

impl OutputTarget {
    /// Resolve to a concrete file path. `now` only matters for directories.
    pub fn resolve(&self, proposal: &ProposalContext, now: NaiveDateTime) -> PathBuf {
        match self {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Directory(dir) => dir.join(default_file_name(proposal, now)),
        }
    }
}

/// `proposal_<slug>_<YYYYmmdd_HHMMSS>.md`
pub fn default_file_name(proposal: &ProposalContext, now: NaiveDateTime) -> String {
    format!(
        "proposal_{}_{}.md",
        proposal.safe_company_slug(),
        now.format("%Y%m%d_%H%M%S")
    )
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, OutputError> {
    let tmp = PathBuf::from(format!("{}.proposal.tmp", path.display()));
    atomic_write_with_tmp(path, content, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, OutputError> {
    match std::fs::read_to_string(path) {
        Ok(existing) if existing == content => {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(path, e)),
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proposal_core::types::CompanyName;
    use std::fs;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid timestamp")
    }

    fn proposal(company: &str) -> ProposalContext {
        ProposalContext {
            company_name: CompanyName::from(company),
            ..ProposalContext::default()
        }
    }

    #[test]
    fn default_file_name_uses_slug_and_timestamp() {
        assert_eq!(
            default_file_name(&proposal("Acme Corp."), at(9, 5, 7)),
            "proposal_Acme_Corp__20261017_090507.md"
        );
    }

    #[test]
    fn directory_target_resolves_inside_dir() {
        let target = OutputTarget::Directory(PathBuf::from("out"));
        let path = target.resolve(&proposal("X"), at(0, 0, 0));
        assert_eq!(path, PathBuf::from("out/proposal_X_20261017_000000.md"));
    }

    #[test]
    fn file_target_is_used_as_is() {
        let target = OutputTarget::File(PathBuf::from("custom.md"));
        assert_eq!(target.resolve(&proposal("X"), at(1, 2, 3)), PathBuf::from("custom.md"));
    }

    #[test]
    fn write_creates_file_and_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("p.md");
        let result = atomic_write(&path, "hello\r\nworld\n", false).unwrap();
        assert_eq!(result, WriteResult::Written { path: path.clone() });
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\r\nworld\n");
        assert!(!dir.path().join("nested").join("p.md.proposal.tmp").exists());
    }

    #[test]
    fn identical_content_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.md");
        atomic_write(&path, "same\n", false).unwrap();
        let second = atomic_write(&path, "same\n", false).unwrap();
        assert!(matches!(second, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn changed_content_is_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.md");
        atomic_write(&path, "v1\n", false).unwrap();
        let second = atomic_write(&path, "v2\n", false).unwrap();
        assert!(matches!(second, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2\n");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("p.md");
        let result = atomic_write(&path, "x\n", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!dir.path().join("sub").exists());
    }

    #[test]
    fn directory_at_destination_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("occupied");
        fs::create_dir_all(path.join("child")).unwrap();
        let tmp = dir.path().join("occupied.tmp");
        let err = atomic_write_with_tmp(&path, "x", false, &tmp);
        assert!(err.is_err());
        assert!(!tmp.exists());
    }
}
