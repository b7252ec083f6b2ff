// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned NCSS, CCN and Javadoc reports.
//!
//! A [`MetricsSource`] supplies package, class and function metric records;
//! a [`ReportWriter`] renders them as fixed-width text or XML.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod metrics;
pub mod numfmt;
pub mod report;

pub use cli::{Cli, Command, OutputFormat, ReportArgs};
pub use error::{Error, ExitCode, Result};
pub use metrics::{FunctionMetric, MetricsSnapshot, MetricsSource, ObjectMetric, PackageMetric};
pub use report::{ReportWriter, Section, TextFormatter, XmlFormatter};
