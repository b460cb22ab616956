//! README → index synchronization.
//!
//! Reads the source once, derives the index text with [`Transform`], then
//! either overwrites the target (`Mode::Write`) or compares it byte-for-byte
//! (`Mode::Check`). Check mode never touches the filesystem beyond reads.

use crate::config::Effective;
use crate::error::{Error, Result};
use crate::transform::Transform;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Write,
    Check,
}

/// Result of one synchronize run. Paths are as configured, relative to the
/// repository root.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub mode: Mode,
    pub source: String,
    pub target: String,
    /// Target content differed from the derived text before this run.
    pub changed: bool,
    pub wrote: bool,
    /// Text the target should hold.
    #[serde(skip)]
    pub expected: String,
    /// Target content as read in check mode (`None` in write mode).
    #[serde(skip)]
    pub current: Option<String>,
}

impl SyncOutcome {
    pub fn in_sync(&self) -> bool {
        !self.changed || self.wrote
    }
}

/// Run one synchronization with the resolved settings.
pub fn synchronize(eff: &Effective, mode: Mode) -> Result<SyncOutcome> {
    let transform = Transform::new(&eff.strip_prefix, &eff.start_marker, &eff.end_marker)?;
    let source = read(&eff.source_path())?;
    let expected = transform.apply(&source);
    debug!(
        source_bytes = source.len(),
        expected_bytes = expected.len(),
        "derived index text"
    );

    let target = eff.target_path();
    match mode {
        Mode::Check => {
            let current = read(&target)?;
            let changed = current != expected;
            Ok(SyncOutcome {
                mode,
                source: eff.source.clone(),
                target: eff.target.clone(),
                changed,
                wrote: false,
                expected,
                current: Some(current),
            })
        }
        Mode::Write => {
            // Only used for reporting; a missing or unreadable target is just rewritten.
            let changed = fs::read_to_string(&target).map_or(true, |cur| cur != expected);
            fs::write(&target, &expected).map_err(|source| Error::Write {
                path: target.clone(),
                source,
            })?;
            debug!(target = %target.display(), changed, "wrote index");
            Ok(SyncOutcome {
                mode,
                source: eff.source.clone(),
                target: eff.target.clone(),
                changed,
                wrote: true,
                expected,
                current: None,
            })
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve_effective, Overrides, DEFAULT_TARGET};
    use crate::transform::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
    use tempfile::{tempdir, TempDir};

    fn repo(readme: &str) -> (TempDir, Effective) {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("com.unity.perception/Documentation~")).unwrap();
        fs::write(root.join("README.md"), readme).unwrap();
        let eff = resolve_effective(&Overrides {
            repo_root: root.to_str(),
            ..Default::default()
        })
        .unwrap();
        (tmp, eff)
    }

    fn readme() -> String {
        format!(
            "# Perception\n[Setup](com.unity.perception/Documentation~/Setup.md)\n\
             {DEFAULT_START_MARKER}\nrepo-only badge\n{DEFAULT_END_MARKER}\nbody\n"
        )
    }

    #[test]
    fn test_write_creates_index() {
        let (tmp, eff) = repo(&readme());
        let out = synchronize(&eff, Mode::Write).unwrap();
        assert!(out.wrote);
        assert!(out.changed);
        let index = fs::read_to_string(tmp.path().join(DEFAULT_TARGET)).unwrap();
        assert_eq!(index, "# Perception\n[Setup](Setup.md)\nbody\n");
    }

    #[test]
    fn test_write_is_idempotent() {
        let (tmp, eff) = repo(&readme());
        synchronize(&eff, Mode::Write).unwrap();
        let first = fs::read_to_string(tmp.path().join(DEFAULT_TARGET)).unwrap();
        let again = synchronize(&eff, Mode::Write).unwrap();
        let second = fs::read_to_string(tmp.path().join(DEFAULT_TARGET)).unwrap();
        assert_eq!(first, second);
        assert!(!again.changed);
    }

    #[test]
    fn test_write_then_check_is_in_sync() {
        let (_tmp, eff) = repo(&readme());
        synchronize(&eff, Mode::Write).unwrap();
        let out = synchronize(&eff, Mode::Check).unwrap();
        assert!(out.in_sync());
        assert!(!out.wrote);
    }

    #[test]
    fn test_check_detects_single_char_drift_without_writing() {
        let (tmp, eff) = repo(&readme());
        synchronize(&eff, Mode::Write).unwrap();
        let target = tmp.path().join(DEFAULT_TARGET);
        let drifted = format!("{} ", fs::read_to_string(&target).unwrap());
        fs::write(&target, &drifted).unwrap();

        let out = synchronize(&eff, Mode::Check).unwrap();
        assert!(!out.in_sync());
        assert_eq!(out.current.as_deref(), Some(drifted.as_str()));
        assert_eq!(fs::read_to_string(&target).unwrap(), drifted);
    }

    #[test]
    fn test_missing_source_is_read_error() {
        let (tmp, eff) = repo("x");
        fs::remove_file(tmp.path().join("README.md")).unwrap();
        let err = synchronize(&eff, Mode::Write).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_check_with_missing_target_is_read_error() {
        let (_tmp, eff) = repo(&readme());
        let err = synchronize(&eff, Mode::Check).unwrap_err();
        assert!(matches!(err, Error::Read { ref path, .. } if path.ends_with("Index.md")));
    }

    #[test]
    fn test_write_into_missing_dir_is_write_error() {
        let (tmp, eff) = repo(&readme());
        fs::remove_dir(tmp.path().join("com.unity.perception/Documentation~")).unwrap();
        let err = synchronize(&eff, Mode::Write).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
