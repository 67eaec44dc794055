//! # Timer - personal time tracking from the command line
//!
//! Start a named timer, pause and resume it, stop it to record an entry, then
//! list, summarize, export or delete the recorded entries. State survives
//! between invocations in two JSON documents in the data directory.
//!
//! ## Features
//!
//! - **Active Timer**: at most one running or paused timer at a time
//! - **Pause Accounting**: pause time never counts towards elapsed time
//! - **Reports**: today, this week or a date range, as a table, CSV or JSON
//! - **Entry Management**: delete entries by a short identifier prefix
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timer::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
