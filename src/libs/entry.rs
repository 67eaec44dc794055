//! Completed time entries.
//!
//! An [`Entry`] is produced exactly once, when an active timer is stopped, and
//! is immutable afterwards. Its fields are private so every instance, whether
//! freshly stopped or loaded from the entries document, has passed the same
//! validation in [`Entry::from_parts`].
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use timer::libs::entry::Entry;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let entry = Entry::from_parts(
//!     "0f1e2d3c-0000-4000-8000-000000000000",
//!     "Review",
//!     "",
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//!     vec![],
//!     vec!["work".to_string()],
//! )?;
//! assert_eq!(entry.duration_seconds(), 3600);
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

use super::error::TimerError;
use super::formatter::format_duration;
use super::pause::{self, PauseInterval};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of identifier characters shown in tables and messages.
pub const SHORT_ID_LEN: usize = 8;

/// An immutable record of one completed timed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
    id: String,
    task_name: String,
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    pauses: Vec<PauseInterval>,
    tags: Vec<String>,
}

impl Entry {
    /// Builds an entry from its parts, checking its integrity.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::MalformedState`] if the identifier or task name is
    /// empty, if `end` precedes `start`, if any pause is still open or ends
    /// before it starts, or if the pauses add up to more than the whole span.
    pub fn from_parts(
        id: impl Into<String>,
        task_name: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        pauses: Vec<PauseInterval>,
        tags: Vec<String>,
    ) -> Result<Self, TimerError> {
        let entry = Entry {
            id: id.into(),
            task_name: task_name.into(),
            description: description.into(),
            start,
            end,
            pauses,
            tags,
        };
        entry.validate().map_err(|reason| TimerError::malformed("entry", reason))?;
        Ok(entry)
    }

    /// Creates an entry with a freshly generated identifier.
    pub(crate) fn record(
        task_name: String,
        description: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        pauses: Vec<PauseInterval>,
        tags: Vec<String>,
    ) -> Result<Self, TimerError> {
        Self::from_parts(Uuid::new_v4().to_string(), task_name, description, start, end, pauses, tags)
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("entry id is empty".to_string());
        }
        if self.task_name.trim().is_empty() {
            return Err(format!("entry {} has an empty task name", self.id));
        }
        if self.end < self.start {
            return Err(format!("entry {} ends before it starts", self.id));
        }
        for pause in &self.pauses {
            match pause.end {
                None => return Err(format!("entry {} contains an open pause", self.id)),
                Some(end) if end < pause.start => {
                    return Err(format!("entry {} contains a pause that ends before it starts", self.id))
                }
                Some(_) => {}
            }
        }
        if self.span_seconds() < pause::total_seconds(&self.pauses) {
            return Err(format!("entry {} has more pause time than elapsed time", self.id));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The leading characters of the identifier used for display.
    pub fn short_id(&self) -> &str {
        self.id.get(..SHORT_ID_LEN).unwrap_or(&self.id)
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn pauses(&self) -> &[PauseInterval] {
        &self.pauses
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    fn span_seconds(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_seconds()
    }

    /// Elapsed time between start and end, minus all pause time.
    ///
    /// Never negative.
    pub fn duration_seconds(&self) -> i64 {
        (self.span_seconds() - pause::total_seconds(&self.pauses)).max(0)
    }

    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_seconds())
    }
}

/// Resolves an identifier or identifier prefix to a single entry.
///
/// An exact identifier match always wins. Otherwise every entry whose
/// identifier starts with `prefix` is a candidate.
///
/// # Errors
///
/// - [`TimerError::NotFound`] when nothing matches
/// - [`TimerError::Ambiguous`] when more than one entry matches
/// - [`TimerError::InvalidInput`] when `prefix` is empty
pub fn find_by_prefix<'a>(entries: &'a [Entry], prefix: &str) -> Result<&'a Entry, TimerError> {
    if prefix.is_empty() {
        return Err(TimerError::InvalidInput("entry id must not be empty".to_string()));
    }
    if let Some(exact) = entries.iter().find(|e| e.id == prefix) {
        return Ok(exact);
    }

    let matches: Vec<&Entry> = entries.iter().filter(|e| e.id.starts_with(prefix)).collect();
    match matches.as_slice() {
        [] => Err(TimerError::NotFound { prefix: prefix.to_string() }),
        [single] => Ok(single),
        _ => Err(TimerError::Ambiguous {
            prefix: prefix.to_string(),
            candidates: matches.iter().map(|e| e.id.clone()).collect(),
        }),
    }
}

/// Persisted shape of an entry in the entries document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    id: String,
    task_name: String,
    #[serde(default)]
    description: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    #[serde(default)]
    duration_seconds: i64,
    #[serde(default)]
    pauses: Vec<PauseInterval>,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = TimerError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Entry::from_parts(
            record.id,
            record.task_name,
            record.description,
            record.start_time,
            record.end_time,
            record.pauses,
            record.tags,
        )
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        EntryRecord {
            duration_seconds: entry.duration_seconds(),
            id: entry.id,
            task_name: entry.task_name,
            description: entry.description,
            start_time: entry.start,
            end_time: entry.end,
            pauses: entry.pauses,
            tags: entry.tags,
        }
    }
}
