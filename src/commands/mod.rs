pub mod config;
pub mod delete;
pub mod list;
pub mod pause;
pub mod report;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod sum;

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::query::EntryFilter;
use crate::libs::tracker::Tracker;
use crate::store::JsonStore;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start timing a new task", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Stop the active timer and save the entry")]
    Stop,
    #[command(about = "Pause the active timer")]
    Pause,
    #[command(about = "Resume a paused timer")]
    Resume,
    #[command(about = "Show current timer status")]
    Status,
    #[command(about = "List recorded time entries")]
    List(list::ListArgs),
    #[command(about = "Export time entries as CSV or JSON")]
    Report(report::ReportArgs),
    #[command(about = "Show time totals per task")]
    Sum(sum::SumArgs),
    #[command(about = "Delete a time entry by ID", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "View or set configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start(args) => start::cmd(args),
            Commands::Stop => stop::cmd(),
            Commands::Pause => pause::cmd(),
            Commands::Resume => resume::cmd(),
            Commands::Status => status::cmd(),
            Commands::List(args) => list::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Config(args) => config::cmd(args),
        }
    }
}

/// Date-range switches shared by the reporting commands.
///
/// Only one selection mode can be used per invocation.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Only entries started today", conflicts_with_all = ["week", "from", "to"])]
    today: bool,

    #[arg(long, help = "Only entries started this week (since Monday)", conflicts_with_all = ["from", "to"])]
    week: bool,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Only entries started on or after this date")]
    from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Only entries started on or before this date")]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn filter(&self) -> EntryFilter {
        EntryFilter::from_flags(self.today, self.week, self.from, self.to)
    }
}

/// Opens the tracker on the configured data directory.
pub(crate) fn open_tracker() -> Result<Tracker<JsonStore>> {
    let storage = DataStorage::new();
    let config = Config::read_from(&storage).map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(e.to_string())))?;
    let data_path = config.data_path(&storage);
    msg_debug!(format!("Using data path {}", data_path.display()));
    Ok(Tracker::new(JsonStore::new(data_path)?))
}
