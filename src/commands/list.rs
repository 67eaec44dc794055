use super::{open_tracker, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::summary::summarize;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::cmp::Reverse;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(short = 'n', long, default_value_t = 10, help = "Number of entries to show")]
    limit: usize,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut entries = args.filter.filter().apply(open_tracker()?.entries()?);

    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    // Most recent first.
    entries.sort_by_key(|e| Reverse(e.start()));
    entries.truncate(args.limit);

    View::entries(&entries).printstd();

    let summary = summarize(&entries);
    msg_print!(Message::EntriesTotal(summary.total_formatted, summary.total_entries));
    Ok(())
}
