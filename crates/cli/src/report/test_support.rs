// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for report writer tests.

// Test helpers that use unwrap for clarity (tests should panic on unexpected failures).
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::metrics::{FunctionMetric, MetricsSnapshot, MetricsSource, ObjectMetric, PackageMetric};

use super::{ReportWriter, Section, create_writer, write_report};

pub fn package(
    name: &str,
    classes: u64,
    functions: u64,
    ncss: u64,
    javadocs: u64,
) -> PackageMetric {
    PackageMetric {
        name: name.to_string(),
        classes,
        functions,
        ncss,
        javadocs,
    }
}

pub fn object(
    name: &str,
    ncss: u64,
    functions: u64,
    classes: u64,
    javadocs: u64,
) -> ObjectMetric {
    ObjectMetric {
        name: name.to_string(),
        ncss,
        functions,
        classes,
        javadocs,
    }
}

pub fn function(name: &str, ncss: u64, ccn: u64, javadocs: u64) -> FunctionMetric {
    FunctionMetric {
        name: name.to_string(),
        ncss,
        ccn,
        javadocs,
    }
}

/// Create a small snapshot with every collection populated.
pub fn create_test_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        ncss: 500,
        packages: vec![package("p", 2, 5, 100, 10)],
        objects: vec![object("p.A", 60, 3, 1, 4), object("p.B", 40, 2, 0, 6)],
        functions: vec![
            function("p.A.run()", 10, 2, 1),
            function("p.A.stop()", 20, 4, 1),
        ],
        ..MetricsSnapshot::new()
    }
}

/// Run one writer method against an in-memory sink and return the text.
pub fn render(print: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
    let mut sink = Vec::new();
    print(&mut sink).unwrap();
    String::from_utf8(sink).unwrap()
}

/// Drive a full report for `format` into a string.
pub fn format_report(
    format: OutputFormat,
    source: &dyn MetricsSource,
    sections: &[Section],
) -> String {
    let writer = create_writer(format, source);
    let mut sink = Vec::new();
    write_report(writer.as_ref(), sections, &mut sink).unwrap();
    String::from_utf8(sink).unwrap()
}

/// Replace the platform line separator with `\n` so expectations read naturally.
pub fn unix(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Assert that every section renders identically on two independent sinks.
pub fn assert_sections_idempotent(writer: &dyn ReportWriter) {
    let sections: [fn(&dyn ReportWriter, &mut dyn Write) -> io::Result<()>; 6] = [
        |w, s| w.print_start(s),
        |w, s| w.print_package_ncss(s),
        |w, s| w.print_object_ncss(s),
        |w, s| w.print_function_ncss(s),
        |w, s| w.print_java_ncss(s),
        |w, s| w.print_end(s),
    ];
    for print in sections {
        let first = render(|sink| print(writer, sink));
        let second = render(|sink| print(writer, sink));
        assert_eq!(first, second, "repeated call should produce identical output");
    }
}

/// Sink that rejects every write.
pub struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
