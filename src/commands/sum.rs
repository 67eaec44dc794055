use super::{open_tracker, FilterArgs};
use crate::libs::messages::Message;
use crate::libs::summary::summarize;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[command(flatten)]
    filter: FilterArgs,

    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let entries = args.filter.filter().apply(open_tracker()?.entries()?);
    let summary = summarize(&entries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    msg_print!(Message::SummaryHeader(summary.total_entries, summary.total_formatted.clone()), true);
    View::summary(&summary).printstd();
    Ok(())
}
