//! CSV and JSON export of time entries.
//!
//! ## Features
//!
//! - **CSV**: one header row and one row per entry, with the duration both in
//!   seconds and as `HH:MM:SS`, tags joined with `,`
//! - **JSON**: the same serialization as the entries document, so an export
//!   can be read back as entries
//! - **Output**: a file when a path is given, otherwise standard output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timer::libs::export::{ExportFormat, Exporter};
//! # let entries: Vec<timer::libs::entry::Entry> = vec![];
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&entries)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::entry::Entry;
use super::formatter::format_timestamp;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Column headers of the CSV export, in order.
pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Task Name",
    "Description",
    "Start Time",
    "End Time",
    "Duration (seconds)",
    "Duration (formatted)",
    "Tags",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet applications
    #[default]
    Csv,
    /// Structured data, readable back as entries
    Json,
}

/// Renders entries as CSV text, in the order given.
pub fn to_csv(entries: &[Entry]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    for entry in entries {
        wtr.write_record(&[
            entry.id().to_string(),
            entry.task_name().to_string(),
            entry.description().to_string(),
            format_timestamp(&entry.start()),
            format_timestamp(&entry.end()),
            entry.duration_seconds().to_string(),
            entry.duration_formatted(),
            entry.tags().join(","),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders entries as a pretty-printed JSON array.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn render(&self, entries: &[Entry]) -> Result<String> {
        match self.format {
            ExportFormat::Csv => to_csv(entries),
            ExportFormat::Json => to_json(entries),
        }
    }

    /// Writes the rendered entries to the output file, or to stdout when no
    /// file was given.
    pub fn export(&self, entries: &[Entry]) -> Result<()> {
        let content = self.render(entries)?;
        match &self.output_path {
            Some(path) => {
                File::create(path)?.write_all(content.as_bytes())?;
                tracing::debug!(path = %path.display(), count = entries.len(), "entries exported");
            }
            None => println!("{}", content),
        }
        Ok(())
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }
}
