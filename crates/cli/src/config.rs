// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles ncss-report.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::report::Section;

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "ncss-report.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "report"];

/// Known keys in `[report]`.
const KNOWN_REPORT_KEYS: &[&str] = &["format", "sections", "snapshot"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    report: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Defaults applied when the command line does not choose.
#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// Output format (default: text).
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Sections written when no section flag is given.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Snapshot read when none is given on the command line, relative to
    /// the config file's directory.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Load config from a file, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})",
            flexible.version, SUPPORTED_VERSION
        )));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let report = match flexible.report {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_REPORT_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("report.{}", key));
                }
            }
            toml::Value::Table(t)
                .try_into::<ReportConfig>()
                .map_err(|e| config_err(format!("report: {}", e)))?
        }
        Some(_) => return Err(config_err("report: expected a table".to_string())),
        None => ReportConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        report,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "ncss-report: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
