// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row-numbered list layout shared by the tabular reports.

use crate::numfmt::{NL, digit_count, pad};

/// Minimum width of the row-number column (`"Nr."`).
pub const NR_WIDTH: usize = 3;

/// Layout state for one list: column labels, row-number width and the
/// current row counter.
///
/// Created fresh by every report call so row numbering always starts at 1.
pub struct ListLayout<'a> {
    labels: &'a [&'a str],
    nr_width: usize,
    nr: usize,
}

impl<'a> ListLayout<'a> {
    /// Lay out a list of `rows` rows under `labels`.
    ///
    /// The last label names the free-form name column; every other label
    /// sets the width of its numeric column.
    pub fn new(rows: usize, labels: &'a [&'a str]) -> Self {
        Self {
            labels,
            nr_width: nr_width(rows),
            nr: 0,
        }
    }

    /// Width of the row-number column.
    pub fn nr_width(&self) -> usize {
        self.nr_width
    }

    /// Header line: `"Nr."` right-aligned, then each label after a space.
    pub fn header(&self) -> String {
        let mut line = pad("Nr.", self.nr_width);
        for label in self.labels {
            line.push(' ');
            line.push_str(label);
        }
        line.push_str(NL);
        line
    }

    /// Next numbered row. Each value is right-aligned under its label and
    /// the name is appended unpadded.
    pub fn row(&mut self, name: &str, values: &[u64]) -> String {
        self.nr += 1;
        let mut line = pad(&self.nr.to_string(), self.nr_width);
        let value_labels = &self.labels[..self.labels.len().saturating_sub(1)];
        for (value, label) in values.iter().zip(value_labels) {
            line.push(' ');
            line.push_str(&pad(&value.to_string(), label.len()));
        }
        line.push(' ');
        line.push_str(name);
        line.push_str(NL);
        line
    }
}

/// Row-number column width for a list of `rows` rows.
pub fn nr_width(rows: usize) -> usize {
    digit_count(rows as u64).max(NR_WIDTH)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
