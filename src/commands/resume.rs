use super::open_tracker;
use crate::libs::messages::Message;
use crate::libs::timer::Transition;
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (timer, transition) = open_tracker()?.resume()?;

    match transition {
        Transition::Applied => msg_print!(Message::TimerResumed(timer.task_name().to_string())),
        Transition::Unchanged => msg_warning!(Message::TimerNotPaused(timer.task_name().to_string())),
    }
    msg_print!(Message::Elapsed(timer.elapsed_formatted()));
    Ok(())
}
