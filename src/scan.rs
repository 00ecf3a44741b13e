//! Loading of axe result files matched by a glob pattern.
//!
//! Files are parsed in parallel and returned in path order together with a
//! list of load/parse problems. Problems never abort the run; a report is
//! still produced for every file that parsed.

use crate::models::axe::ScanResults;
use glob::glob;
use rayon::prelude::*;
use std::path::PathBuf;

/// One parsed result file.
pub struct ScanFile {
    pub file: String,
    pub results: ScanResults,
}

/// Expand `pattern` relative to `repo_root` and parse every match.
///
/// Returns parsed files sorted by path plus human-readable error strings
/// for files that could not be read or were not valid result JSON.
pub fn load_scans(repo_root: &str, pattern: &str) -> (Vec<ScanFile>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();

    let abs_glob = PathBuf::from(repo_root).join(pattern);
    let pattern_str = abs_glob.to_string_lossy().to_string();
    let entries = match glob(&pattern_str) {
        Ok(it) => it,
        Err(e) => {
            errors.push(format!("Bad input pattern '{}': {}", pattern, e));
            return (Vec::new(), errors);
        }
    };
    let mut targets: Vec<PathBuf> = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) => targets.push(p),
            Err(e) => errors.push(format!(
                "Cannot access '{}': {}",
                e.path().to_string_lossy(),
                e.error()
            )),
        }
    }
    targets.sort();
    if targets.is_empty() {
        errors.push(format!("No result files matched '{}'", pattern));
        return (Vec::new(), errors);
    }

    let per_file: Vec<Result<ScanFile, String>> = targets
        .par_iter()
        .map(|path| {
            let file = path.to_string_lossy().to_string();
            let data = match std::fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => return Err(format!("Cannot read '{}': {}", file, e)),
            };
            match serde_json::from_str::<ScanResults>(&data) {
                Ok(results) => Ok(ScanFile { file, results }),
                Err(e) => Err(format!("'{}' is not valid axe result JSON: {}", file, e)),
            }
        })
        .collect();

    let mut scans: Vec<ScanFile> = Vec::new();
    for r in per_file {
        match r {
            Ok(s) => scans.push(s),
            Err(e) => errors.push(e),
        }
    }
    (scans, errors)
}
