//! Configuration discovery and effective settings resolution.
//!
//! orphan-scan reads `orphan-scan.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `file`: `frontend/src/app/profile/components/InvestingTab/index.js`
//! - `output`: `human`
//! - `color`: true
//! - `skip`: no extra denylist entries
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File scanned when neither the CLI nor the config names one.
pub const DEFAULT_FILE: &str = "frontend/src/app/profile/components/InvestingTab/index.js";

/// Config file names, in lookup order.
const CONFIG_FILES: [&str; 3] = ["orphan-scan.toml", "orphan-scan.yaml", "orphan-scan.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `orphan-scan.toml|yaml`.
pub struct ScanConfig {
    /// Target file, relative to the repository root.
    pub file: Option<String>,
    pub output: Option<String>,
    pub color: Option<bool>,
    /// Extra denylist substrings appended to the built-in list.
    #[serde(default)]
    pub skip: Vec<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Path opened for scanning.
    pub file: PathBuf,
    /// Path text shown in the report banner.
    pub display: String,
    pub output: String,
    pub color: bool,
    pub skip: Vec<String>,
    pub config_found: bool,
}

fn config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES.iter().map(|n| dir.join(n)).find(|p| p.is_file())
}

/// Walk upward from `start` to the first directory holding a config file or
/// a `.git` directory; falls back to `start`.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| config_file_in(dir).is_some() || dir.join(".git").exists())
        .unwrap_or(start)
        .to_path_buf()
}

/// Parse the first config file found in `root`. A file that cannot be read or
/// parsed counts as absent.
pub fn load_config(root: &Path) -> Option<ScanConfig> {
    let path = config_file_in(root)?;
    let text = fs::read_to_string(&path).ok()?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&text).ok(),
        _ => serde_yaml::from_str(&text).ok(),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// A CLI path is taken as given (relative to the working directory); a path
/// from the config file or the default is joined onto the repository root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_file: Option<&str>,
    cli_output: Option<&str>,
    cli_no_color: bool,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let (file, display) = match cli_file {
        Some(p) => (PathBuf::from(p), p.to_string()),
        None => {
            let rel = cfg.file.clone().unwrap_or_else(|| DEFAULT_FILE.to_string());
            (repo_root.join(&rel), rel)
        }
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let color = !cli_no_color && cfg.color.unwrap_or(true);

    Effective {
        repo_root,
        file,
        display,
        output,
        color,
        skip: cfg.skip,
        config_found,
    }
}
