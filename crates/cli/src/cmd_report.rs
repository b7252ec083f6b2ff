// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use ncss_report::cli::{Cli, ReportArgs};
use ncss_report::config::{self, Config};
use ncss_report::discovery;
use ncss_report::error::{Error, ExitCode};
use ncss_report::metrics::{MetricsSnapshot, MetricsSource};
use ncss_report::report::{self, Section};

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    // Output target (CLI flag overrides config)
    let (format, file_path) = match args.output_target()? {
        Some(target) => target,
        None => (config.report.format.unwrap_or_default(), None),
    };

    // Section flags override config; with neither, only the program total.
    let mut sections = args.selected_sections();
    if sections.is_empty() {
        sections = config.report.sections.clone();
    }
    if sections.is_empty() {
        sections.push(Section::Total);
    }
    tracing::debug!(?format, ?sections, "report selection");

    let snapshot_path = discovery::resolve_snapshot(
        args.snapshot.as_deref(),
        config.report.snapshot.as_deref(),
        config_path.as_deref(),
    )?;
    let snapshot = MetricsSnapshot::load(&snapshot_path)?;

    if let Some(message) = snapshot.last_error() {
        if snapshot.ncss() == 0 {
            return Err(Error::Source(message.to_string()).into());
        }
        eprintln!("ncss-report: warning: {}", message);
    }

    let writer = report::create_writer(format, &snapshot);

    match file_path {
        Some(path) => {
            let io_err = |source| Error::Io {
                path: path.clone(),
                source,
            };
            let file = std::fs::File::create(&path).map_err(io_err)?;
            let mut out = std::io::BufWriter::new(file);
            report::write_report(writer.as_ref(), &sections, &mut out).map_err(io_err)?;
            out.flush().map_err(io_err)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::write_report(writer.as_ref(), &sections, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(ExitCode::Success)
}
