//! Display implementation for application messages.
//!
//! All message wording is defined here so the command modules only pick a
//! `Message` variant and the output macros decide where it goes.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted(name) => format!("⏱️  Started timer for '{}'", name),
            Message::TimerAlreadyRunning(name) => format!("Timer already running for '{}'", name),
            Message::TimerStopped(name) => format!("Stopped timer for '{}'", name),
            Message::TimerPaused(name) => format!("⏸️  Paused timer for '{}'", name),
            Message::TimerAlreadyPaused(name) => format!("⏸️  Timer for '{}' is already paused.", name),
            Message::TimerResumed(name) => format!("▶️  Resumed timer for '{}'", name),
            Message::TimerNotPaused(name) => format!("▶️  Timer for '{}' is already running.", name),
            Message::NoActiveTimer => "No active timer running.".to_string(),
            Message::NoActiveTimerStatus => "No active timer.".to_string(),
            Message::UseStopFirst => "   Use 'timer stop' first or 'timer status' to check.".to_string(),
            Message::UseStartHint => "   Use 'timer start <name>' to start one.".to_string(),
            Message::UseResumeHint => "   Use 'timer resume' to continue.".to_string(),

            // === DETAIL LINES ===
            Message::Elapsed(elapsed) => format!("   Elapsed: {}", elapsed),
            Message::ElapsedBeforePause(elapsed) => format!("   Elapsed before pause: {}", elapsed),
            Message::Duration(duration) => format!("   Duration: {}", duration),
            Message::EntryId(id) => format!("   Entry ID: {}...", id),
            Message::Description(description) => format!("   Description: {}", description),
            Message::Tags(tags) => format!("   Tags: {}", tags.join(", ")),
            Message::LastEntry(name, duration) => format!("Last entry: '{}' ({})", name, duration),

            // === ENTRY MESSAGES ===
            Message::NoEntriesFound => "No entries found.".to_string(),
            Message::EntriesTotal(total, count) => format!("Total: {} across {} entries", total, count),
            Message::EntryNotFound(prefix) => format!("No entry found matching '{}'", prefix),
            Message::EntriesMatchPrefix(prefix) => format!("Multiple entries match '{}':", prefix),
            Message::AmbiguousCandidate(id, name) => format!("   {} - {}", id, name),
            Message::UseMoreSpecificId => "Use a more specific ID.".to_string(),
            Message::ConfirmDeleteEntry(name, duration) => format!("Delete entry '{}' ({})?", name, duration),
            Message::EntryDeleted(name) => format!("🗑️  Deleted entry '{}'", name),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === REPORT MESSAGES ===
            Message::ExportCompleted(count, path) => format!("Exported {} entries to {}", count, path),
            Message::SummaryHeader(count, total) => format!("Summary of {} entries, {} in total", count, total),

            // === CONFIGURATION MESSAGES ===
            Message::DataPathSet(path) => format!("Data path set to: {}", path),
            Message::CurrentConfiguration => "Current configuration:".to_string(),
            Message::ConfiguredDataPath(path) => format!("  Data path: {}", path),
            Message::ResolvedDataPath(path) => format!("  (Resolved: {})", path),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration: {}", error),

            // === STORAGE MESSAGES ===
            Message::MalformedState(error) => format!("Stored timer data is damaged: {}", error),
        };
        write!(f, "{}", text)
    }
}
