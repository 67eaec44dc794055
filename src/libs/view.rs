use super::entry::Entry;
use super::formatter::{format_date, format_datetime};
use super::summary::Summary;
use super::timer::ActiveTimer;
use prettytable::{row, Table};

/// Maximum task name width in the entry list.
const TASK_COLUMN_WIDTH: usize = 20;

pub struct View {}

impl View {
    /// Renders the short entry list: short id, task, duration and date.
    pub fn entries(entries: &[Entry]) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "TASK", "DURATION", "DATE"]);
        for entry in entries {
            let task: String = entry.task_name().chars().take(TASK_COLUMN_WIDTH).collect();
            table.add_row(row![entry.short_id(), task, entry.duration_formatted(), format_date(&entry.start())]);
        }

        table
    }

    /// Renders per-task totals followed by the overall total.
    pub fn summary(summary: &Summary) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["TASK", "ENTRIES", "SECONDS", "DURATION"]);
        for (task_name, task) in &summary.by_task {
            table.add_row(row![task_name, task.count, task.seconds, task.formatted]);
        }
        table.add_row(row!["TOTAL", summary.total_entries, summary.total_seconds, summary.total_formatted]);

        table
    }

    /// Renders the active timer's state and details.
    pub fn active(timer: &ActiveTimer) -> Table {
        let mut table = Table::new();
        let status = if timer.is_paused() { "⏸️  PAUSED" } else { "⏱️  RUNNING" };

        table.add_row(row!["TASK", timer.task_name()]);
        table.add_row(row!["STATUS", status]);
        table.add_row(row!["STARTED", format_datetime(&timer.start())]);
        table.add_row(row!["ELAPSED", timer.elapsed_formatted()]);
        if !timer.description().is_empty() {
            table.add_row(row!["DESCRIPTION", timer.description()]);
        }
        if !timer.tags().is_empty() {
            table.add_row(row!["TAGS", timer.tags().join(", ")]);
        }

        table
    }
}
