use super::entry::Entry;
use super::formatter::format_duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one task name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TaskSummary {
    pub count: usize,
    pub seconds: i64,
    pub formatted: String,
}

/// Aggregate over a collection of entries, grouped by task name.
///
/// `by_task` is ordered by task name, not by first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_entries: usize,
    pub total_seconds: i64,
    pub total_formatted: String,
    pub by_task: BTreeMap<String, TaskSummary>,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            total_entries: 0,
            total_seconds: 0,
            total_formatted: format_duration(0),
            by_task: BTreeMap::new(),
        }
    }
}

/// Totals the durations of `entries`. Empty input yields the zero summary.
pub fn summarize(entries: &[Entry]) -> Summary {
    let mut by_task: BTreeMap<String, TaskSummary> = BTreeMap::new();
    for entry in entries {
        let task = by_task.entry(entry.task_name().to_string()).or_default();
        task.count += 1;
        task.seconds += entry.duration_seconds();
    }
    for task in by_task.values_mut() {
        task.formatted = format_duration(task.seconds);
    }

    let total_seconds = entries.iter().map(Entry::duration_seconds).sum();

    Summary {
        total_entries: entries.len(),
        total_seconds,
        total_formatted: format_duration(total_seconds),
        by_task,
    }
}
