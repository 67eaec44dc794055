use std::process::ExitCode;
use timer::commands::Cli;
use timer::libs::error::{Conflict, TimerError};
use timer::libs::messages::macros::is_debug_mode;
use timer::libs::messages::Message;
use timer::msg_error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TimerError>() {
                Some(TimerError::Conflict(Conflict::AlreadyRunning { task_name })) => {
                    msg_error!(Message::TimerAlreadyRunning(task_name.clone()))
                }
                Some(TimerError::Conflict(Conflict::NoActiveTimer)) => msg_error!(Message::NoActiveTimer),
                Some(TimerError::NotFound { prefix }) => msg_error!(Message::EntryNotFound(prefix.clone())),
                Some(TimerError::MalformedState { .. }) => msg_error!(Message::MalformedState(e.to_string())),
                _ => msg_error!(e),
            }
            ExitCode::FAILURE
        }
    }
}
