//! Typed failures reported by the timer core and its storage layer.
//!
//! Every failure the command surface can observe is a [`TimerError`]. Raw
//! parse errors from persisted documents never leak out: they are wrapped in
//! [`TimerError::MalformedState`] together with the name of the document that
//! failed to load.

use thiserror::Error;

/// A state conflict between the requested operation and the active timer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// `start` was requested while another timer is running or paused.
    #[error("a timer is already running for '{task_name}'")]
    AlreadyRunning { task_name: String },

    /// `pause`, `resume` or `stop` was requested with no active timer.
    #[error("no active timer")]
    NoActiveTimer,
}

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("{0}")]
    Conflict(#[from] Conflict),

    #[error("no entry found matching '{prefix}'")]
    NotFound { prefix: String },

    /// More than one entry identifier starts with the given prefix.
    #[error("{} entries match '{prefix}'", candidates.len())]
    Ambiguous { prefix: String, candidates: Vec<String> },

    /// A persisted document failed to parse or violates its invariants.
    #[error("malformed {document}: {reason}")]
    MalformedState { document: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TimerError {
    pub fn malformed(document: impl Into<String>, reason: impl ToString) -> Self {
        TimerError::MalformedState {
            document: document.into(),
            reason: reason.to_string(),
        }
    }
}
