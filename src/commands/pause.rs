use super::open_tracker;
use crate::libs::messages::Message;
use crate::libs::timer::Transition;
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (timer, transition) = open_tracker()?.pause()?;

    match transition {
        Transition::Applied => {
            msg_print!(Message::TimerPaused(timer.task_name().to_string()));
            msg_print!(Message::Elapsed(timer.elapsed_formatted()));
        }
        Transition::Unchanged => {
            msg_warning!(Message::TimerAlreadyPaused(timer.task_name().to_string()));
            msg_print!(Message::ElapsedBeforePause(timer.elapsed_formatted()));
            msg_print!(Message::UseResumeHint);
        }
    }
    Ok(())
}
