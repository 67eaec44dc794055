/// Every user-facing text the command surface prints.
///
/// The wording lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String),         // task name
    TimerAlreadyRunning(String),  // task name
    TimerStopped(String),         // task name
    TimerPaused(String),          // task name
    TimerAlreadyPaused(String),   // task name
    TimerResumed(String),         // task name
    TimerNotPaused(String),       // task name
    NoActiveTimer,
    NoActiveTimerStatus,
    UseStopFirst,
    UseStartHint,
    UseResumeHint,

    // === DETAIL LINES ===
    Elapsed(String),              // HH:MM:SS
    ElapsedBeforePause(String),   // HH:MM:SS
    Duration(String),             // HH:MM:SS
    EntryId(String),              // short id
    Description(String),
    Tags(Vec<String>),
    LastEntry(String, String),    // task name, duration

    // === ENTRY MESSAGES ===
    NoEntriesFound,
    EntriesTotal(String, usize),  // total duration, entry count
    EntryNotFound(String),        // prefix
    EntriesMatchPrefix(String),   // prefix
    AmbiguousCandidate(String, String), // short id, task name
    UseMoreSpecificId,
    ConfirmDeleteEntry(String, String), // task name, duration
    EntryDeleted(String),         // task name
    OperationCancelled,

    // === REPORT MESSAGES ===
    ExportCompleted(usize, String), // count, path
    SummaryHeader(usize, String),   // entry count, total duration

    // === CONFIGURATION MESSAGES ===
    DataPathSet(String),
    CurrentConfiguration,
    ConfiguredDataPath(String),
    ResolvedDataPath(String),
    ConfigReadFailed(String),     // error

    // === STORAGE MESSAGES ===
    MalformedState(String),       // error
}
