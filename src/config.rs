//! Configuration discovery and effective settings resolution.
//!
//! Raxe reads `raxe.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `input`: none (must be configured via CLI or config file)
//! - `output`: `human`
//! - `report.check`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Report-related configuration section under `[report]`.
pub struct ReportCfg {
    /// Exit non-zero when any report carries violations.
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `raxe.toml|yaml`.
pub struct RaxeConfig {
    /// Glob pattern for axe result JSON files, relative to the repo root.
    pub input: Option<String>,
    pub output: Option<String>,
    pub report: Option<ReportCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub input: String,
    pub input_configured: bool,
    pub output: String,
    pub check: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `raxe.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("raxe.toml").exists()
            || cur.join("raxe.yaml").exists()
            || cur.join("raxe.yml").exists()
        {
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

/// Load `RaxeConfig` from `raxe.toml` or `raxe.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<RaxeConfig> {
    let toml_path = root.join("raxe.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: RaxeConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["raxe.yaml", "raxe.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: RaxeConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_input: Option<&str>,
    cli_output: Option<&str>,
    cli_check: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let input_src = cli_input.map(|s| s.to_string()).or(cfg.input);
    let (input, input_configured) = match input_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let check = cli_check
        .or_else(|| cfg.report.as_ref().and_then(|r| r.check))
        .unwrap_or(false);

    Effective {
        repo_root,
        input,
        input_configured,
        output,
        check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("raxe.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input = "reports/*.json"
output = "json"
[report]
check = true
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.input, "reports/*.json");
        assert!(eff.input_configured);
        assert_eq!(eff.output, "json");
        assert!(eff.check);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("raxe.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input: axe-results.json
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.input, "axe-results.json");
        // output and check default when unspecified
        assert_eq!(eff.output, "human");
        assert!(!eff.check);
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("raxe.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input = "reports/*.json"
output = "json"
[report]
check = true
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), Some("one.json"), Some("human"), Some(false));
        assert_eq!(eff.input, "one.json");
        assert_eq!(eff.output, "human");
        assert!(!eff.check);
    }

    #[test]
    fn test_unconfigured_input_flagged() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None, None);
        assert!(!eff.input_configured);
        assert!(eff.input.is_empty());
    }
}
