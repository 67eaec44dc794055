use super::open_tracker;
use crate::libs::error::{Conflict, TimerError};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[arg(required = true, help = "Task name")]
    name: String,

    #[arg(short, long, default_value = "", help = "Task description")]
    description: String,

    #[arg(short = 't', long = "tag", help = "Add tags (can be used multiple times)")]
    tags: Vec<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let tracker = open_tracker()?;

    match tracker.start(&args.name, &args.description, args.tags) {
        Ok(timer) => {
            msg_success!(Message::TimerStarted(timer.task_name().to_string()));
            if !timer.description().is_empty() {
                msg_print!(Message::Description(timer.description().to_string()));
            }
            if !timer.tags().is_empty() {
                msg_print!(Message::Tags(timer.tags().to_vec()));
            }
            Ok(())
        }
        Err(TimerError::Conflict(Conflict::AlreadyRunning { task_name })) => {
            // Show how far along the running timer is before refusing.
            if let Some(active) = tracker.active()? {
                msg_print!(Message::Elapsed(active.elapsed_formatted()));
            }
            msg_print!(Message::UseStopFirst);
            Err(Conflict::AlreadyRunning { task_name }.into())
        }
        Err(e) => Err(e.into()),
    }
}
