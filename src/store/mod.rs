//! Persistence of the active timer and the entry collection.
//!
//! The timer core never touches the filesystem. It receives an active timer
//! (or its absence) and an entry sequence loaded through a [`TimerStore`], and
//! hands back values for the store to persist. Each document is read and
//! written whole.

pub mod json;

pub use json::JsonStore;

use crate::libs::entry::Entry;
use crate::libs::error::TimerError;
use crate::libs::timer::ActiveTimer;

pub trait TimerStore {
    /// Loads the active timer, `None` when no timer is running or paused.
    fn load_active(&self) -> Result<Option<ActiveTimer>, TimerError>;

    fn save_active(&self, timer: &ActiveTimer) -> Result<(), TimerError>;

    /// Removes the active timer. Clearing an absent timer is not an error.
    fn clear_active(&self) -> Result<(), TimerError>;

    /// Loads all entries in stored order, empty when none were recorded yet.
    fn load_entries(&self) -> Result<Vec<Entry>, TimerError>;

    /// Replaces the whole entry collection.
    fn save_entries(&self, entries: &[Entry]) -> Result<(), TimerError>;
}
