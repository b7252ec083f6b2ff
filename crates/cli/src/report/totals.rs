// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-pass sums and derived averages for each report granularity.
//!
//! Sums saturate at `u64::MAX` rather than wrap, so oversized input still
//! renders a (clamped) report.

use crate::metrics::{FunctionMetric, ObjectMetric, PackageMetric};
use crate::numfmt::divide;

/// Sums over the package collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageTotals {
    pub packages: u64,
    pub classes: u64,
    pub functions: u64,
    pub ncss: u64,
    pub javadocs: u64,
}

impl PackageTotals {
    pub fn from_records(records: &[PackageMetric]) -> Self {
        records.iter().fold(
            Self {
                packages: records.len() as u64,
                ..Self::default()
            },
            |acc, p| Self {
                classes: acc.classes.saturating_add(p.classes),
                functions: acc.functions.saturating_add(p.functions),
                ncss: acc.ncss.saturating_add(p.ncss),
                javadocs: acc.javadocs.saturating_add(p.javadocs),
                ..acc
            },
        )
    }

    /// Ratio matrix rows, from the project level down to the function level.
    ///
    /// Denominators are the raw sums; a zero sum yields `0.0` ratios.
    pub fn ratio_rows(&self) -> [RatioRow; 4] {
        let per_package = |n| divide(n, self.packages);
        let per_class = |n| divide(n, self.classes);
        let per_function = |n| divide(n, self.functions);
        [
            RatioRow {
                level: Level::Project,
                values: vec![
                    self.packages as f64,
                    self.classes as f64,
                    self.functions as f64,
                    self.ncss as f64,
                    self.javadocs as f64,
                ],
            },
            RatioRow {
                level: Level::Package,
                values: vec![
                    per_package(self.classes),
                    per_package(self.functions),
                    per_package(self.ncss),
                    per_package(self.javadocs),
                ],
            },
            RatioRow {
                level: Level::Class,
                values: vec![
                    per_class(self.functions),
                    per_class(self.ncss),
                    per_class(self.javadocs),
                ],
            },
            RatioRow {
                level: Level::Function,
                values: vec![per_function(self.ncss), per_function(self.javadocs)],
            },
        ]
    }
}

/// Aggregation level a ratio row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Project,
    Package,
    Class,
    Function,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Project => "Project",
            Level::Package => "Package",
            Level::Class => "Class",
            Level::Function => "Function",
        }
    }

    /// Matrix columns skipped before this level's first value.
    pub fn indent(self) -> usize {
        match self {
            Level::Project => 0,
            Level::Package => 1,
            Level::Class => 2,
            Level::Function => 3,
        }
    }
}

/// One row of the package ratio matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioRow {
    pub level: Level,
    pub values: Vec<f64>,
}

/// Sums over the object collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectTotals {
    pub objects: u64,
    pub ncss: u64,
    pub functions: u64,
    pub classes: u64,
    pub javadocs: u64,
}

impl ObjectTotals {
    pub fn from_records(records: &[ObjectMetric]) -> Self {
        let mut totals = Self {
            objects: records.len() as u64,
            ..Self::default()
        };
        for object in records {
            totals.ncss = totals.ncss.saturating_add(object.ncss);
            totals.functions = totals.functions.saturating_add(object.functions);
            totals.classes = totals.classes.saturating_add(object.classes);
            totals.javadocs = totals.javadocs.saturating_add(object.javadocs);
        }
        totals
    }

    pub fn average_ncss(&self) -> f64 {
        divide(self.ncss, self.objects)
    }

    pub fn average_functions(&self) -> f64 {
        divide(self.functions, self.objects)
    }

    pub fn average_classes(&self) -> f64 {
        divide(self.classes, self.objects)
    }

    pub fn average_javadocs(&self) -> f64 {
        divide(self.javadocs, self.objects)
    }
}

/// Sums over the function collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctionTotals {
    pub functions: u64,
    pub ncss: u64,
    pub ccn: u64,
    pub javadocs: u64,
}

impl FunctionTotals {
    pub fn from_records(records: &[FunctionMetric]) -> Self {
        let mut totals = Self {
            functions: records.len() as u64,
            ..Self::default()
        };
        for function in records {
            totals.ncss = totals.ncss.saturating_add(function.ncss);
            totals.ccn = totals.ccn.saturating_add(function.ccn);
            totals.javadocs = totals.javadocs.saturating_add(function.javadocs);
        }
        totals
    }

    pub fn average_ncss(&self) -> f64 {
        divide(self.ncss, self.functions)
    }

    pub fn average_ccn(&self) -> f64 {
        divide(self.ccn, self.functions)
    }

    pub fn average_javadocs(&self) -> f64 {
        divide(self.javadocs, self.functions)
    }
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
