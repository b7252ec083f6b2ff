// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::report::Section;

/// Column-aligned NCSS, CCN and Javadoc reports from collected source metrics
#[derive(Parser)]
#[command(name = "ncss-report")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "NCSS_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a report from a metrics snapshot
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Metrics snapshot (JSON) written by the collector [default: report.snapshot from config]
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output format or file: text, xml, or a path ending in .txt/.xml
    #[arg(short, long, value_name = "FORMAT|FILE")]
    pub output: Option<String>,

    /// Include the package table and ratio matrix
    #[arg(long)]
    pub package: bool,

    /// Include the class table
    #[arg(long)]
    pub object: bool,

    /// Include the function table
    #[arg(long)]
    pub function: bool,

    /// Include package, class and function tables
    ///
    /// The `Java NCSS:` total line is only written when no section is selected.
    #[arg(long)]
    pub all: bool,
}

impl ReportArgs {
    /// Parse the output argument into a format and optional file path.
    ///
    /// Returns `None` when no output was requested on the command line.
    pub fn output_target(&self) -> Result<Option<(OutputFormat, Option<PathBuf>)>> {
        let Some(output) = self.output.as_deref() else {
            return Ok(None);
        };
        let val = output.to_lowercase();

        let target = if val.ends_with(".xml") {
            (OutputFormat::Xml, Some(PathBuf::from(output)))
        } else if val.ends_with(".txt") {
            (OutputFormat::Text, Some(PathBuf::from(output)))
        } else {
            let format = match val.as_str() {
                "text" => OutputFormat::Text,
                "xml" => OutputFormat::Xml,
                _ => {
                    return Err(Error::Argument(format!(
                        "unknown output `{}` (expected text, xml, or a .txt/.xml file)",
                        output
                    )));
                }
            };
            (format, None)
        };
        Ok(Some(target))
    }

    /// Sections requested by flags, empty when none were given.
    pub fn selected_sections(&self) -> Vec<Section> {
        if self.all {
            return Section::TABLES.to_vec();
        }
        [
            (self.package, Section::Package),
            (self.object, Section::Object),
            (self.function, Section::Function),
        ]
        .into_iter()
        .filter_map(|(on, section)| on.then_some(section))
        .collect()
    }
}

/// Report output medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Xml,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
