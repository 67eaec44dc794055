//! Pause intervals recorded while a timer is suspended.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A span of time during which elapsed-time accrual was suspended.
///
/// An interval is opened when a running timer is paused and closed when that
/// timer is resumed or stopped. Only closed intervals are ever stored inside an
/// [`ActiveTimer`](crate::libs::timer::ActiveTimer) or an
/// [`Entry`](crate::libs::entry::Entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PauseRecord", into = "PauseRecord")]
pub struct PauseInterval {
    /// The timestamp when the pause started.
    pub start: NaiveDateTime,
    /// The timestamp when the pause ended, absent while the pause is ongoing.
    pub end: Option<NaiveDateTime>,
}

impl PauseInterval {
    pub fn closed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end: Some(end) }
    }

    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    /// Length of the pause in whole seconds.
    ///
    /// An open pause contributes nothing until it is closed.
    pub fn duration_seconds(&self) -> i64 {
        self.end.map_or(0, |end| end.signed_duration_since(self.start).num_seconds())
    }
}

/// Sums the durations of a sequence of pauses.
pub fn total_seconds(pauses: &[PauseInterval]) -> i64 {
    pauses.iter().map(PauseInterval::duration_seconds).sum()
}

/// Persisted shape of a pause: `{start, end, duration_seconds}`.
///
/// `duration_seconds` is written for the benefit of readers of the document
/// and ignored on load, where it is derived again from `start` and `end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PauseRecord {
    start: NaiveDateTime,
    #[serde(default)]
    end: Option<NaiveDateTime>,
    #[serde(default)]
    duration_seconds: i64,
}

impl From<PauseRecord> for PauseInterval {
    fn from(record: PauseRecord) -> Self {
        PauseInterval {
            start: record.start,
            end: record.end,
        }
    }
}

impl From<PauseInterval> for PauseRecord {
    fn from(pause: PauseInterval) -> Self {
        PauseRecord {
            duration_seconds: pause.duration_seconds(),
            start: pause.start,
            end: pause.end,
        }
    }
}
