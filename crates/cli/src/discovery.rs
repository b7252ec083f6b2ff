// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the config file and the metrics snapshot a report reads.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Nearest `ncss-report.toml` in `start_dir` or an ancestor.
///
/// The search does not leave the enclosing git work tree.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config file for this run: the `-C`/`NCSS_REPORT_CONFIG` path when given
/// (which must exist), otherwise whatever [`find_config`] turns up.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };
    if !path.exists() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

/// Snapshot to report on.
///
/// A path on the command line is used as given. Otherwise `report.snapshot`
/// from the config is taken relative to the directory holding that config,
/// so a report can be run from anywhere below it.
pub fn resolve_snapshot(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let Some(configured) = configured else {
        return Err(Error::Argument(format!(
            "no snapshot given (pass SNAPSHOT or set report.snapshot in {CONFIG_FILE})"
        )));
    };
    let base = config_path.and_then(Path::parent).unwrap_or(Path::new(""));
    Ok(base.join(configured))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
