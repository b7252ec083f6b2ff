// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width text report output.

use std::io::{self, Write};

use crate::metrics::MetricsSource;
use crate::numfmt::{NL, format_grouped, format_ungrouped, pad};

use super::ReportWriter;
use super::layout::{ListLayout, nr_width};
use super::totals::{FunctionTotals, ObjectTotals, PackageTotals};

const PACKAGE_LABELS: &[&str] = &["  Classes", "Functions", "     NCSS", " Javadocs", "Package"];
const OBJECT_LABELS: &[&str] = &["NCSS", "Functions", "Classes", "Javadocs", "Class"];
const FUNCTION_LABELS: &[&str] = &["NCSS", "CCN", "JVDC", "Function"];

const MATRIX_LABELS: [&str; 5] = ["Packages", "Classes", "Functions", "NCSS", "Javadocs"];
const MATRIX_MIN_WIDTH: usize = 9;

/// Column-aligned text formatter.
pub struct TextFormatter<'a> {
    source: &'a dyn MetricsSource,
}

impl<'a> TextFormatter<'a> {
    pub fn new(source: &'a dyn MetricsSource) -> Self {
        Self { source }
    }

    /// Staircase table of per-package, per-class and per-function ratios.
    fn package_matrix(totals: &PackageTotals) -> String {
        let width = format_ungrouped(totals.ncss as f64)
            .len()
            .max(MATRIX_MIN_WIDTH);
        let cell = |value: f64| pad(&format_ungrouped(value), width);

        let mut out = MATRIX_LABELS
            .iter()
            .map(|label| pad(label, width))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(" | per");
        out.push_str(NL);
        out.push_str(&"-".repeat((width + 1) * 6 + 1));
        out.push_str(NL);

        for row in totals.ratio_rows() {
            out.push_str(&" ".repeat((width + 1) * row.level.indent()));
            let cells: Vec<_> = row.values.iter().map(|v| cell(*v)).collect();
            out.push_str(&cells.join(" "));
            out.push_str(" | ");
            out.push_str(row.level.label());
            out.push_str(NL);
        }
        out
    }

    fn object_resume(&self, totals: &ObjectTotals) -> String {
        format!(
            "Average Object NCSS:             {:>9.2}{NL}\
             Average Object Functions:        {:>9.2}{NL}\
             Average Object Inner Classes:    {:>9.2}{NL}\
             Average Object Javadoc Comments: {:>9.2}{NL}\
             Program NCSS:                    {:>9}{NL}",
            totals.average_ncss(),
            totals.average_functions(),
            totals.average_classes(),
            totals.average_javadocs(),
            format_grouped(self.source.ncss() as f64),
        )
    }

    fn function_resume(&self, totals: &FunctionTotals) -> String {
        format!(
            "Average Function NCSS: {:>10.2}{NL}\
             Average Function CCN:  {:>10.2}{NL}\
             Average Function JVDC: {:>10.2}{NL}\
             Program NCSS:          {:>10}{NL}",
            totals.average_ncss(),
            totals.average_ccn(),
            totals.average_javadocs(),
            format_grouped(self.source.ncss() as f64),
        )
    }
}

impl ReportWriter for TextFormatter<'_> {
    fn print_package_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let packages = self.source.packages();
        let mut layout = ListLayout::new(packages.len(), PACKAGE_LABELS);
        w.write_all(layout.header().as_bytes())?;

        for p in packages {
            let line = layout.row(&p.name, &[p.classes, p.functions, p.ncss, p.javadocs]);
            w.write_all(line.as_bytes())?;
        }

        let totals = PackageTotals::from_records(packages);
        let indent = " ".repeat(nr_width(packages.len()) + 1);
        write!(w, "{indent}--------- --------- --------- ---------{NL}")?;
        write!(
            w,
            "{indent}{:>9} {:>9} {:>9} {:>9} Total{NL}{NL}",
            totals.classes, totals.functions, totals.ncss, totals.javadocs
        )?;

        w.write_all(Self::package_matrix(&totals).as_bytes())
    }

    fn print_object_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let objects = self.source.objects();
        let mut layout = ListLayout::new(objects.len(), OBJECT_LABELS);
        w.write_all(layout.header().as_bytes())?;

        for o in objects {
            let line = layout.row(&o.name, &[o.ncss, o.functions, o.classes, o.javadocs]);
            w.write_all(line.as_bytes())?;
        }

        let totals = ObjectTotals::from_records(objects);
        w.write_all(self.object_resume(&totals).as_bytes())
    }

    fn print_function_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        let functions = self.source.functions();
        let mut layout = ListLayout::new(functions.len(), FUNCTION_LABELS);
        w.write_all(layout.header().as_bytes())?;

        for f in functions {
            let line = layout.row(&f.name, &[f.ncss, f.ccn, f.javadocs]);
            w.write_all(line.as_bytes())?;
        }

        let totals = FunctionTotals::from_records(functions);
        w.write_all(self.function_resume(&totals).as_bytes())
    }

    fn print_java_ncss(&self, w: &mut dyn Write) -> io::Result<()> {
        write!(w, "Java NCSS: {}{NL}", self.source.ncss())
    }

    fn print_separator(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(NL.as_bytes())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
