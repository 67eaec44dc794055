use super::open_tracker;
use crate::libs::error::TimerError;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true, help = "Entry ID or a unique prefix of it")]
    entry_id: String,

    #[arg(short, long, help = "Skip confirmation")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let tracker = open_tracker()?;

    let entry = match tracker.find(&args.entry_id) {
        Ok(entry) => entry,
        Err(TimerError::Ambiguous { prefix, candidates }) => {
            let entries = tracker.entries()?;
            msg_print!(Message::EntriesMatchPrefix(prefix.clone()));
            for entry in entries.iter().filter(|e| candidates.iter().any(|id| id == e.id())) {
                msg_print!(Message::AmbiguousCandidate(entry.short_id().to_string(), entry.task_name().to_string()));
            }
            msg_print!(Message::UseMoreSpecificId);
            return Err(TimerError::Ambiguous { prefix, candidates }.into());
        }
        Err(e) => return Err(e.into()),
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(entry.task_name().to_string(), entry.duration_formatted()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_bail_anyhow!(Message::OperationCancelled);
        }
    }

    // Delete by the full identifier so a prefix cannot drift between lookup and removal.
    let deleted = tracker.delete(entry.id())?;
    msg_success!(Message::EntryDeleted(deleted.task_name().to_string()));
    Ok(())
}
