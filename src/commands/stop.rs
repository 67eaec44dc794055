use super::open_tracker;
use crate::libs::error::{Conflict, TimerError};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tracker = open_tracker()?;

    match tracker.stop() {
        Ok(entry) => {
            msg_success!(Message::TimerStopped(entry.task_name().to_string()));
            msg_print!(Message::Duration(entry.duration_formatted()));
            msg_print!(Message::EntryId(entry.short_id().to_string()));
            Ok(())
        }
        Err(TimerError::Conflict(Conflict::NoActiveTimer)) => {
            msg_print!(Message::UseStartHint);
            Err(Conflict::NoActiveTimer.into())
        }
        Err(e) => Err(e.into()),
    }
}
