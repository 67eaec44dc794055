//! Export of recorded entries to CSV or JSON, on stdout or into a file.

use super::{open_tracker, FilterArgs};
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, value_enum, default_value = "csv", help = "Export format")]
    format: ExportFormat,

    #[command(flatten)]
    filter: FilterArgs,

    #[arg(short, long, help = "Output file (prints to stdout if not specified)")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let entries = args.filter.filter().apply(open_tracker()?.entries()?);

    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&entries)?;

    if let Some(path) = exporter.output_path() {
        msg_success!(Message::ExportCompleted(entries.len(), path.display().to_string()));
    }
    Ok(())
}
