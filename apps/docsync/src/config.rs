//! Configuration discovery and effective settings resolution.
//!
//! docsync reads `docsync.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `source`: `README.md`
//! - `target`: `com.unity.perception/Documentation~/Index.md`
//! - `strip_prefix`: `com.unity.perception/Documentation~/`
//! - `markers.start|end`: `[//]: # (Exclude from Index.md)` / `[//]: # (End Exclude)`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::transform::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, DEFAULT_STRIP_PREFIX};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SOURCE: &str = "README.md";
pub const DEFAULT_TARGET: &str = "com.unity.perception/Documentation~/Index.md";

const CONFIG_FILES: [&str; 3] = ["docsync.toml", "docsync.yaml", "docsync.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Exclusion marker lines under `[markers]`.
pub struct MarkersCfg {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `docsync.toml|yaml`.
pub struct DocsyncConfig {
    pub source: Option<String>,
    pub target: Option<String>,
    #[serde(rename = "stripPrefix", alias = "strip_prefix")]
    pub strip_prefix: Option<String>,
    pub markers: Option<MarkersCfg>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the synchronizer after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub source: String,
    pub target: String,
    pub strip_prefix: String,
    pub start_marker: String,
    pub end_marker: String,
    pub output: String,
    /// Config file the settings were merged from, if any.
    pub config_file: Option<PathBuf>,
}

impl Effective {
    pub fn source_path(&self) -> PathBuf {
        self.repo_root.join(&self.source)
    }

    pub fn target_path(&self) -> PathBuf {
        self.repo_root.join(&self.target)
    }
}

/// CLI-provided overrides; `None` falls through to config and defaults.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub repo_root: Option<&'a str>,
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
    pub output: Option<&'a str>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `docsync.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DocsyncConfig` from `docsync.toml` or `docsync.yaml|yml` if present.
///
/// A missing file is `Ok(None)`; a file that fails to parse is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, DocsyncConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DocsyncConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DocsyncConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(Error::Config { path, message }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides<'_>) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.unwrap_or("."));
    // Relative paths like "." have no parents to walk.
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let (config_file, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, DocsyncConfig::default()),
    };

    let source = cli
        .source
        .map(str::to_string)
        .or(cfg.source)
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let target = cli
        .target
        .map(str::to_string)
        .or(cfg.target)
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());
    let output = cli
        .output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let strip_prefix = cfg
        .strip_prefix
        .unwrap_or_else(|| DEFAULT_STRIP_PREFIX.to_string());
    let markers = cfg.markers.unwrap_or_default();
    let start_marker = markers
        .start
        .unwrap_or_else(|| DEFAULT_START_MARKER.to_string());
    let end_marker = markers
        .end
        .unwrap_or_else(|| DEFAULT_END_MARKER.to_string());

    if output != "human" && output != "json" {
        return Err(Error::Config {
            path: config_file.clone().unwrap_or_else(|| repo_root.clone()),
            message: format!("unknown output mode {output:?} (expected human|json)"),
        });
    }

    let eff = Effective {
        repo_root,
        source,
        target,
        strip_prefix,
        start_marker,
        end_marker,
        output,
        config_file,
    };
    debug!(?eff, "resolved effective settings");
    Ok(eff)
}
