use super::open_tracker;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tracker = open_tracker()?;

    match tracker.active()? {
        Some(timer) => {
            View::active(&timer).printstd();
        }
        None => {
            msg_print!(Message::NoActiveTimerStatus);
            if let Some(last) = tracker.last_entry()? {
                msg_print!(Message::LastEntry(last.task_name().to_string(), last.duration_formatted()));
            }
        }
    }
    Ok(())
}
