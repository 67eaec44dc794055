//! The active-timer state machine.
//!
//! At most one [`ActiveTimer`] exists at a time. It is created by `start`,
//! mutated in place by `pause` and `resume`, and consumed by `stop`, which
//! turns it into an [`Entry`]. There is no explicit stopped state: stopping
//! leaves the state machine entirely.
//!
//! ```text
//!            pause()                      stop()
//!  Running ──────────▶ Paused { since } ──────────▶ Entry
//!     ▲                    │
//!     └────── resume() ────┘
//!  Running ───────────────────────────────────────▶ Entry
//!                         stop()
//! ```
//!
//! ## Time Arithmetic
//!
//! Pause time is excluded from elapsed time at every observation point:
//!
//! - **Running**: `elapsed = (now - start) - Σ closed pauses`
//! - **Paused**: `elapsed = (since - start) - Σ closed pauses`
//!
//! The open pause is tracked by the `Paused` state and only folded into the
//! pause sequence when the timer is resumed or stopped.
//!
//! ## Clock Access
//!
//! Each operation has an `*_at` form that takes the current instant
//! explicitly. The plain forms read the local wall clock at the point of use,
//! so pausing and immediately resuming can record a zero-length pause.
//!
//! ```rust
//! use timer::libs::timer::{ActiveTimer, Transition};
//!
//! let mut timer = ActiveTimer::create("Write docs", "", vec![])?;
//! assert_eq!(timer.pause(), Transition::Applied);
//! assert_eq!(timer.pause(), Transition::Unchanged);
//! let entry = timer.stop()?;
//! assert_eq!(entry.pauses().len(), 1);
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

use super::entry::Entry;
use super::error::TimerError;
use super::formatter::format_duration;
use super::pause::{self, PauseInterval};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Name used for the active timer in malformed-state reports.
const DOCUMENT: &str = "active timer";

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whether the active timer is accruing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    /// Suspended since the given instant; the open pause is not yet recorded.
    Paused { since: NaiveDateTime },
}

/// Outcome of a `pause` or `resume` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// The timer changed state.
    Applied,
    /// The timer was already in the requested state; nothing changed.
    Unchanged,
}

/// The in-progress timer, persisted between invocations as the active-timer
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActiveTimerRecord", into = "ActiveTimerRecord")]
pub struct ActiveTimer {
    task_name: String,
    description: String,
    tags: Vec<String>,
    start: NaiveDateTime,
    state: TimerState,
    pauses: Vec<PauseInterval>,
}

impl ActiveTimer {
    /// Starts a new timer now.
    ///
    /// The caller is responsible for checking that no other timer is active.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidInput`] if the task name is empty.
    pub fn create(task_name: impl Into<String>, description: impl Into<String>, tags: Vec<String>) -> Result<Self, TimerError> {
        Self::create_at(task_name, description, tags, now())
    }

    pub fn create_at(
        task_name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        now: NaiveDateTime,
    ) -> Result<Self, TimerError> {
        let task_name = task_name.into();
        if task_name.trim().is_empty() {
            return Err(TimerError::InvalidInput("task name must not be empty".to_string()));
        }

        Ok(ActiveTimer {
            task_name,
            description: description.into(),
            tags,
            start: now,
            state: TimerState::Running,
            pauses: Vec::new(),
        })
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, TimerState::Paused { .. })
    }

    /// When the current pause began, if the timer is paused.
    pub fn pause_start(&self) -> Option<NaiveDateTime> {
        match self.state {
            TimerState::Paused { since } => Some(since),
            TimerState::Running => None,
        }
    }

    /// Closed pauses accumulated so far.
    pub fn pauses(&self) -> &[PauseInterval] {
        &self.pauses
    }

    pub fn pause(&mut self) -> Transition {
        self.pause_at(now())
    }

    /// Suspends a running timer. Already paused timers are left untouched.
    pub fn pause_at(&mut self, now: NaiveDateTime) -> Transition {
        match self.state {
            TimerState::Paused { .. } => Transition::Unchanged,
            TimerState::Running => {
                self.state = TimerState::Paused {
                    since: now.max(self.latest_instant()),
                };
                Transition::Applied
            }
        }
    }

    pub fn resume(&mut self) -> Transition {
        self.resume_at(now())
    }

    /// Closes the open pause and resumes accruing time.
    pub fn resume_at(&mut self, now: NaiveDateTime) -> Transition {
        match self.state {
            TimerState::Running => Transition::Unchanged,
            TimerState::Paused { since } => {
                self.pauses.push(PauseInterval::closed(since, now.max(since)));
                self.state = TimerState::Running;
                Transition::Applied
            }
        }
    }

    pub fn stop(self) -> Result<Entry, TimerError> {
        self.stop_at(now())
    }

    /// Finalizes the timer into an [`Entry`] ending at `now`.
    ///
    /// A pause still open at this point is closed at the same instant and
    /// deducted from the entry duration.
    pub fn stop_at(mut self, now: NaiveDateTime) -> Result<Entry, TimerError> {
        let end = now.max(self.latest_instant());
        if let TimerState::Paused { since } = self.state {
            self.pauses.push(PauseInterval::closed(since, end));
        }

        Entry::record(self.task_name, self.description, self.start, end, self.pauses, self.tags)
    }

    /// The latest instant already recorded: start, any pause boundary.
    ///
    /// New pause boundaries never go below it, so a clock stepping backwards
    /// cannot produce overlapping pauses or an end before them.
    fn latest_instant(&self) -> NaiveDateTime {
        let pause_ends = self.pauses.iter().filter_map(|p| p.end);
        let since = match self.state {
            TimerState::Paused { since } => Some(since),
            TimerState::Running => None,
        };
        pause_ends.chain(since).fold(self.start, NaiveDateTime::max)
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_seconds_at(now())
    }

    /// Time accrued since start, excluding every pause including an open one.
    pub fn elapsed_seconds_at(&self, now: NaiveDateTime) -> i64 {
        let observed = match self.state {
            TimerState::Paused { since } => since,
            TimerState::Running => now,
        };
        let total = observed.signed_duration_since(self.start).num_seconds();
        (total - pause::total_seconds(&self.pauses)).max(0)
    }

    pub fn elapsed_formatted(&self) -> String {
        format_duration(self.elapsed_seconds())
    }
}

/// Persisted shape of the active-timer document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActiveTimerRecord {
    task_name: String,
    start_time: NaiveDateTime,
    #[serde(default)]
    paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pause_start: Option<NaiveDateTime>,
    #[serde(default)]
    pauses: Vec<PauseInterval>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<ActiveTimerRecord> for ActiveTimer {
    type Error = TimerError;

    fn try_from(record: ActiveTimerRecord) -> Result<Self, Self::Error> {
        if record.task_name.trim().is_empty() {
            return Err(TimerError::malformed(DOCUMENT, "task_name is empty"));
        }

        let state = match (record.paused, record.pause_start) {
            (true, Some(since)) => TimerState::Paused { since },
            (false, None) => TimerState::Running,
            (true, None) => return Err(TimerError::malformed(DOCUMENT, "paused is true but pause_start is missing")),
            (false, Some(_)) => return Err(TimerError::malformed(DOCUMENT, "pause_start is set but paused is false")),
        };

        if record.pauses.iter().any(|p| !p.is_closed()) {
            return Err(TimerError::malformed(DOCUMENT, "pauses contains an interval without an end"));
        }

        Ok(ActiveTimer {
            task_name: record.task_name,
            description: record.description,
            tags: record.tags,
            start: record.start_time,
            state,
            pauses: record.pauses,
        })
    }
}

impl From<ActiveTimer> for ActiveTimerRecord {
    fn from(timer: ActiveTimer) -> Self {
        ActiveTimerRecord {
            paused: timer.is_paused(),
            pause_start: timer.pause_start(),
            task_name: timer.task_name,
            start_time: timer.start,
            pauses: timer.pauses,
            description: timer.description,
            tags: timer.tags,
        }
    }
}
