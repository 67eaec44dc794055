//! Load-check-act-save orchestration around the timer state machine.
//!
//! The single active timer is never held in a global. Every operation loads
//! the current timer-or-absent from the store, checks it, applies the state
//! machine, and persists the result before returning.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timer::libs::tracker::Tracker;
//! use timer::store::JsonStore;
//!
//! let tracker = Tracker::new(JsonStore::new("/tmp/timer-data")?);
//! tracker.start("Write report", "", vec!["work".into()])?;
//! let entry = tracker.stop()?;
//! println!("{} took {}", entry.task_name(), entry.duration_formatted());
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

use super::entry::{self, Entry};
use super::error::{Conflict, TimerError};
use super::timer::{ActiveTimer, Transition};
use crate::store::TimerStore;

pub struct Tracker<S: TimerStore> {
    store: S,
}

impl<S: TimerStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active timer, if any.
    pub fn active(&self) -> Result<Option<ActiveTimer>, TimerError> {
        self.store.load_active()
    }

    fn require_active(&self) -> Result<ActiveTimer, TimerError> {
        self.store.load_active()?.ok_or(TimerError::Conflict(Conflict::NoActiveTimer))
    }

    /// Starts a new timer and persists it.
    ///
    /// # Errors
    ///
    /// - [`Conflict::AlreadyRunning`] if a timer is already active
    /// - [`TimerError::InvalidInput`] if the task name is empty
    pub fn start(&self, task_name: &str, description: &str, tags: Vec<String>) -> Result<ActiveTimer, TimerError> {
        if let Some(active) = self.store.load_active()? {
            return Err(Conflict::AlreadyRunning {
                task_name: active.task_name().to_string(),
            }
            .into());
        }

        let timer = ActiveTimer::create(task_name, description, tags)?;
        self.store.save_active(&timer)?;
        tracing::debug!(task = %timer.task_name(), "timer started");
        Ok(timer)
    }

    /// Pauses the active timer. Nothing is written when it was already paused.
    pub fn pause(&self) -> Result<(ActiveTimer, Transition), TimerError> {
        let mut timer = self.require_active()?;
        let transition = timer.pause();
        if transition == Transition::Applied {
            self.store.save_active(&timer)?;
            tracing::debug!(task = %timer.task_name(), "timer paused");
        }
        Ok((timer, transition))
    }

    /// Resumes the active timer. Nothing is written when it was already running.
    pub fn resume(&self) -> Result<(ActiveTimer, Transition), TimerError> {
        let mut timer = self.require_active()?;
        let transition = timer.resume();
        if transition == Transition::Applied {
            self.store.save_active(&timer)?;
            tracing::debug!(task = %timer.task_name(), "timer resumed");
        }
        Ok((timer, transition))
    }

    /// Stops the active timer, appends the resulting entry and clears the
    /// active-timer document.
    ///
    /// The entry collection is saved before the active timer is cleared, so an
    /// interrupted stop never loses the recorded time.
    pub fn stop(&self) -> Result<Entry, TimerError> {
        let timer = self.require_active()?;
        let mut entries = self.store.load_entries()?;

        let entry = timer.stop()?;
        entries.push(entry.clone());
        self.store.save_entries(&entries)?;
        self.store.clear_active()?;

        tracing::debug!(id = %entry.id(), seconds = entry.duration_seconds(), "timer stopped");
        Ok(entry)
    }

    /// All recorded entries in stored order.
    pub fn entries(&self) -> Result<Vec<Entry>, TimerError> {
        self.store.load_entries()
    }

    pub fn last_entry(&self) -> Result<Option<Entry>, TimerError> {
        Ok(self.store.load_entries()?.pop())
    }

    /// Looks up an entry by identifier or unique identifier prefix.
    pub fn find(&self, prefix: &str) -> Result<Entry, TimerError> {
        let entries = self.store.load_entries()?;
        entry::find_by_prefix(&entries, prefix).cloned()
    }

    /// Deletes the entry matching `prefix` and returns it.
    ///
    /// Nothing is written unless exactly one entry matches.
    pub fn delete(&self, prefix: &str) -> Result<Entry, TimerError> {
        let mut entries = self.store.load_entries()?;
        let target = entry::find_by_prefix(&entries, prefix)?.clone();

        entries.retain(|e| e.id() != target.id());
        self.store.save_entries(&entries)?;

        tracing::debug!(id = %target.id(), "entry deleted");
        Ok(target)
    }
}
