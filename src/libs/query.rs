//! Date-range selection over collections of entries.
//!
//! All filters look at an entry's start timestamp only. They are exposed
//! independently through [`EntryQuery`] and can be chained; the command line
//! applies at most one of them per invocation through [`EntryFilter`].
//!
//! ```rust,no_run
//! use timer::libs::query::EntryQuery;
//! # let entries: Vec<timer::libs::entry::Entry> = vec![];
//!
//! let this_week = entries.this_week();
//! ```

use super::entry::Entry;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Local midnight at the start of the day containing `now`.
pub fn today_start(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Local midnight of the most recent Monday, `now`'s day included.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    let monday = now.date() - Duration::days(now.weekday().num_days_from_monday() as i64);
    monday.and_time(NaiveTime::MIN)
}

/// First instant of `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of `date`.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveDateTime::MAX)
}

pub trait EntryQuery: Sized {
    /// Keeps entries starting at or after `start`.
    fn since(self, start: NaiveDateTime) -> Self;

    /// Keeps entries starting within `from..=to`.
    fn between(self, from: NaiveDateTime, to: NaiveDateTime) -> Self;

    /// Keeps entries started since local midnight today.
    fn today(self) -> Self {
        self.since(today_start(Local::now().naive_local()))
    }

    /// Keeps entries started since local midnight of this week's Monday.
    fn this_week(self) -> Self {
        self.since(week_start(Local::now().naive_local()))
    }
}

impl EntryQuery for Vec<Entry> {
    fn since(self, start: NaiveDateTime) -> Self {
        self.into_iter().filter(|e| e.start() >= start).collect()
    }

    fn between(self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.into_iter().filter(|e| e.start() >= from && e.start() <= to).collect()
    }
}

/// Selection mode chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    Today,
    Week,
    Range(NaiveDateTime, NaiveDateTime),
}

impl EntryFilter {
    /// Builds a filter from the mutually exclusive command-line switches.
    ///
    /// A missing `from` means the beginning of time and a missing `to` the end
    /// of time, both inclusive.
    pub fn from_flags(today: bool, week: bool, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        if today {
            EntryFilter::Today
        } else if week {
            EntryFilter::Week
        } else if from.is_some() || to.is_some() {
            let from = from.map_or(NaiveDateTime::MIN, day_start);
            let to = to.map_or(NaiveDateTime::MAX, day_end);
            EntryFilter::Range(from, to)
        } else {
            EntryFilter::All
        }
    }

    pub fn apply(self, entries: Vec<Entry>) -> Vec<Entry> {
        match self {
            EntryFilter::All => entries,
            EntryFilter::Today => entries.today(),
            EntryFilter::Week => entries.this_week(),
            EntryFilter::Range(from, to) => entries.between(from, to),
        }
    }
}
