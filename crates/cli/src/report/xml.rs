// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! XML report output.
//!
//! The document is bracketed by `print_start` / `print_end`, so a full
//! report is only well-formed when driven through both hooks.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::metrics::MetricsSource;
use crate::numfmt::{NL, format_ungrouped};

use super::ReportWriter;
use super::totals::{FunctionTotals, ObjectTotals, PackageTotals};

/// XML formatter.
pub struct XmlFormatter<'a> {
    source: &'a dyn MetricsSource,
    generated: NaiveDateTime,
}

impl<'a> XmlFormatter<'a> {
    /// Formatter stamped with the current local time.
    pub fn new(source: &'a dyn MetricsSource) -> Self {
        Self::with_timestamp(source, chrono::Local::now().naive_local())
    }

    pub fn with_timestamp(source: &'a dyn MetricsSource, generated: NaiveDateTime) -> Self {
        Self { source, generated }
    }
}

/// Escape the five XML special characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<tag>value</tag>` on its own line at `depth` levels of indentation.
fn element(
    w: &mut dyn Write,
    depth: usize,
    tag: &str,
    value: impl std::fmt::Display,
) -> io::Result<()> {
    write!(w, "{}<{tag}>{value}</{tag}>{NL}", "  ".repeat(depth))
}

/// Like [`element`], with one escaped attribute on the start tag.
fn element_with(
    w: &mut dyn Write,
    depth: usize,
    tag: &str,
    (name, attr): (&str, &str),
    value: impl std::fmt::Display,
) -> io::Result<()> {
    write!(
        w,
        "{}<{tag} {name}=\"{}\">{value}</{tag}>{NL}",
        "  ".repeat(depth),
        escape(attr)
    )
}

fn open(w: &mut dyn Write, depth: usize, tag: &str) -> io::Result<()> {
    write!(w, "{}<{tag}>{NL}", "  ".repeat(depth))
}

fn close(w: &mut dyn Write, depth: usize, tag: &str) -> io::Result<()> {
    write!(w, "{}</{tag}>{NL}", "  ".repeat(depth))
}

impl ReportWriter for XmlFormatter<'_> {
    fn print_start(&self, w: &mut dyn Write) -> io::Result<()> {
        write!(w, "<?xml version=\"1.0\"?>{NL}")?;
        open(w, 0, "javancss")?;
        element(w, 1, "date", self.generated.format("%Y-%m-%d"))?;
        element(w, 1, "time", self.generated.format("%H:%M:%S"))
    }

    fn print_package_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let packages = self.source.packages();
        open(w, 1, "packages")?;
        for p in packages {
            open(w, 2, "package")?;
            element(w, 3, "name", escape(&p.name))?;
            element(w, 3, "classes", p.classes)?;
            element(w, 3, "functions", p.functions)?;
            element(w, 3, "ncss", p.ncss)?;
            element(w, 3, "javadocs", p.javadocs)?;
            close(w, 2, "package")?;
        }

        let totals = PackageTotals::from_records(packages);
        open(w, 2, "total")?;
        element(w, 3, "classes", totals.classes)?;
        element(w, 3, "functions", totals.functions)?;
        element(w, 3, "ncss", totals.ncss)?;
        element(w, 3, "javadocs", totals.javadocs)?;
        close(w, 2, "total")?;

        open(w, 2, "table")?;
        for row in totals.ratio_rows() {
            let cells: Vec<_> = row.values.iter().map(|v| format_ungrouped(*v)).collect();
            element_with(w, 3, "per", ("level", row.level.label()), cells.join(" "))?;
        }
        close(w, 2, "table")?;
        close(w, 1, "packages")
    }

    fn print_object_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let objects = self.source.objects();
        open(w, 1, "objects")?;
        for o in objects {
            open(w, 2, "object")?;
            element(w, 3, "name", escape(&o.name))?;
            element(w, 3, "ncss", o.ncss)?;
            element(w, 3, "functions", o.functions)?;
            element(w, 3, "classes", o.classes)?;
            element(w, 3, "javadocs", o.javadocs)?;
            close(w, 2, "object")?;
        }

        let totals = ObjectTotals::from_records(objects);
        open(w, 2, "averages")?;
        element(w, 3, "ncss", format_ungrouped(totals.average_ncss()))?;
        element(w, 3, "functions", format_ungrouped(totals.average_functions()))?;
        element(w, 3, "classes", format_ungrouped(totals.average_classes()))?;
        element(w, 3, "javadocs", format_ungrouped(totals.average_javadocs()))?;
        close(w, 2, "averages")?;
        element(w, 2, "ncss", format_ungrouped(self.source.ncss() as f64))?;
        close(w, 1, "objects")
    }

    fn print_function_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let functions = self.source.functions();
        open(w, 1, "functions")?;
        for f in functions {
            open(w, 2, "function")?;
            element(w, 3, "name", escape(&f.name))?;
            element(w, 3, "ncss", f.ncss)?;
            element(w, 3, "ccn", f.ccn)?;
            element(w, 3, "javadocs", f.javadocs)?;
            close(w, 2, "function")?;
        }

        let totals = FunctionTotals::from_records(functions);
        open(w, 2, "function_averages")?;
        element(w, 3, "ncss", format_ungrouped(totals.average_ncss()))?;
        element(w, 3, "ccn", format_ungrouped(totals.average_ccn()))?;
        element(w, 3, "javadocs", format_ungrouped(totals.average_javadocs()))?;
        close(w, 2, "function_averages")?;
        element(w, 2, "ncss", format_ungrouped(self.source.ncss() as f64))?;
        close(w, 1, "functions")
    }

    fn print_java_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        element(w, 1, "ncss", self.source.ncss())
    }

    fn print_end(&self, w: &mut dyn Write) -> io::Result<()> {
        close(w, 0, "javancss")
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
