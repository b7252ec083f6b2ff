// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metric records and the source that supplies them to report writers.
//!
//! Records are read-only snapshots: collection order is the discovery order
//! of the collector and is preserved in every report.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Per-package metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetric {
    pub name: String,
    #[serde(default)]
    pub classes: u64,
    #[serde(default)]
    pub functions: u64,
    #[serde(default)]
    pub ncss: u64,
    #[serde(default)]
    pub javadocs: u64,
}

/// Per-class (object) metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetric {
    /// Qualified type name.
    pub name: String,
    #[serde(default)]
    pub ncss: u64,
    #[serde(default)]
    pub functions: u64,
    /// Nested (inner) type count.
    #[serde(default)]
    pub classes: u64,
    #[serde(default)]
    pub javadocs: u64,
}

/// Per-function metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetric {
    /// Qualified signature.
    pub name: String,
    #[serde(default)]
    pub ncss: u64,
    /// Cyclomatic complexity number.
    #[serde(default)]
    pub ccn: u64,
    #[serde(default)]
    pub javadocs: u64,
}

/// Data source consumed by report writers.
///
/// `Sync` so that a writer borrowing a source can be shared between threads.
pub trait MetricsSource: Sync {
    /// Packages in discovery order.
    fn packages(&self) -> &[PackageMetric];

    /// Classes and other object types in discovery order.
    fn objects(&self) -> &[ObjectMetric];

    /// Functions in discovery order.
    fn functions(&self) -> &[FunctionMetric];

    /// Program-wide NCSS total as counted by the collector.
    ///
    /// Not derived from the per-report sums; the scopes may differ.
    fn ncss(&self) -> u64;

    /// Last error reported by the collector, if any.
    fn last_error(&self) -> Option<&str> {
        None
    }
}

/// Serialized output of a metrics collector run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Format version for forward compatibility.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Program NCSS total.
    #[serde(default)]
    pub ncss: u64,

    /// Collector failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    #[serde(default)]
    pub packages: Vec<PackageMetric>,

    #[serde(default)]
    pub objects: Vec<ObjectMetric>,

    #[serde(default)]
    pub functions: Vec<FunctionMetric>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSnapshot {
    /// Create an empty snapshot at the current format version.
    pub fn new() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            ncss: 0,
            last_error: None,
            packages: Vec::new(),
            objects: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Snapshot {
            message: e.to_string(),
            path: path.to_path_buf(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse snapshot JSON, rejecting formats newer than this build understands.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let snapshot: MetricsSnapshot =
            serde_json::from_str(content).map_err(|e| Error::Snapshot {
                message: e.to_string(),
                path: path.to_path_buf(),
            })?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(Error::Snapshot {
                message: format!(
                    "unsupported snapshot version {} (supported: {})",
                    snapshot.version, SNAPSHOT_VERSION
                ),
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            packages = snapshot.packages.len(),
            objects = snapshot.objects.len(),
            functions = snapshot.functions.len(),
            "loaded snapshot from {}",
            path.display()
        );

        Ok(snapshot)
    }
}

impl MetricsSource for MetricsSnapshot {
    fn packages(&self) -> &[PackageMetric] {
        &self.packages
    }

    fn objects(&self) -> &[ObjectMetric] {
        &self.objects
    }

    fn functions(&self) -> &[FunctionMetric] {
        &self.functions
    }

    fn ncss(&self) -> u64 {
        self.ncss
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
