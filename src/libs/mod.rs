//! Core library modules for the timer application.
//!
//! ## Features
//!
//! - **Timer State Machine**: start, pause, resume and stop with pause-aware time arithmetic
//! - **Entries**: immutable completed records with prefix lookup by identifier
//! - **Queries**: today, this week and date-range selection, per-task summaries
//! - **Export**: CSV and JSON rendering of entries
//! - **Infrastructure**: configuration, data directory, messaging, terminal tables
//!
//! ## Usage
//!
//! ```rust
//! use timer::libs::summary::summarize;
//! use timer::libs::timer::ActiveTimer;
//!
//! let timer = ActiveTimer::create("Implement feature", "", vec![])?;
//! let entry = timer.stop()?;
//! let summary = summarize(&[entry]);
//! assert_eq!(summary.total_entries, 1);
//! # Ok::<(), timer::libs::error::TimerError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod pause;
pub mod query;
pub mod summary;
pub mod timer;
pub mod tracker;
pub mod view;
