// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report writers.
//!
//! A [`ReportWriter`] renders the package, object and function sections and
//! the single-line program total of a [`MetricsSource`] to any
//! `std::io::Write` sink. The sink belongs to the caller; writers never
//! flush or close it.

mod layout;
mod text;
pub mod totals;
mod xml;

use std::io::{self, Write};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::metrics::MetricsSource;

pub use text::TextFormatter;
pub use xml::XmlFormatter;

/// Output-medium independent report writer.
///
/// Every method writes to `w` and returns the sink's I/O error unchanged.
/// Writers keep no state between calls, so one writer can render any number
/// of reports, including from several threads.
pub trait ReportWriter {
    /// Emit content that must precede every section (document prologue).
    fn print_start(&self, _w: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Emit content that must follow every section.
    fn print_end(&self, _w: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Emit whatever separates two consecutive sections.
    fn print_separator(&self, _w: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Package table, totals and ratio matrix.
    fn print_package_ncss(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Class table and per-object averages.
    fn print_object_ncss(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Function table and per-function averages.
    fn print_function_ncss(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Program NCSS total.
    fn print_java_ncss(&self, w: &mut dyn Write) -> io::Result<()>;
}

/// Report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Package,
    Object,
    Function,
    Total,
}

impl Section {
    /// Sections in the order they appear in a combined report.
    pub const ALL: [Section; 4] = [
        Section::Package,
        Section::Object,
        Section::Function,
        Section::Total,
    ];

    /// Sections selected by `--all`.
    pub const TABLES: [Section; 3] = [Section::Package, Section::Object, Section::Function];

    fn print(self, writer: &dyn ReportWriter, w: &mut dyn Write) -> io::Result<()> {
        match self {
            Section::Package => writer.print_package_ncss(w),
            Section::Object => writer.print_object_ncss(w),
            Section::Function => writer.print_function_ncss(w),
            Section::Total => writer.print_java_ncss(w),
        }
    }
}

/// Create the writer for an output format.
pub fn create_writer<'a>(
    format: OutputFormat,
    source: &'a dyn MetricsSource,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(source)),
        OutputFormat::Xml => Box::new(XmlFormatter::new(source)),
    }
}

/// Write a full report: start hook, the requested sections in canonical
/// order with separators between them, end hook.
///
/// Duplicate sections are written once.
pub fn write_report(
    writer: &dyn ReportWriter,
    sections: &[Section],
    w: &mut dyn Write,
) -> io::Result<()> {
    writer.print_start(w)?;
    let selected = Section::ALL.into_iter().filter(|s| sections.contains(s));
    for (i, section) in selected.enumerate() {
        if i > 0 {
            writer.print_separator(w)?;
        }
        tracing::debug!("writing {:?} section", section);
        section.print(writer, w)?;
    }
    writer.print_end(w)
}

#[cfg(test)]
pub mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
