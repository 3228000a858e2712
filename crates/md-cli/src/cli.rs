//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use md_core::HOURS_PER_DAY;

use crate::commands::{calc::CalcArgs, delete::DeleteArgs, reset::ResetArgs, switch::SwitchArgs};

/// Manday tracker.
///
/// Logs work time against named tasks and reports totals in mandays.
/// Run without arguments to see a summary of all tasks.
#[derive(Debug, Parser)]
#[command(
    name = "md",
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    after_help = after_help()
)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Time to add to the active task (H:MM or HH:MM).
    #[arg(value_name = "TIME")]
    pub time: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Switch to a different task.
    Switch(SwitchArgs),

    /// Delete a task from the list.
    #[command(visible_aliases = ["del", "rm"])]
    Delete(DeleteArgs),

    /// Reset all tasks, or a single task to 0:00.
    Reset(ResetArgs),

    /// Convert a time to mandays without recording it.
    #[command(visible_aliases = ["c", "calculate"])]
    Calc(CalcArgs),
}

fn after_help() -> String {
    format!(
        "\
Examples:
  md 2:15               Add 2 hours 15 minutes to the active task
  md 0:30               Add 30 minutes
  md                    Show summary
  md switch PROJ-123    Switch to task PROJ-123
  md delete PROJ-123    Delete task PROJ-123 from the list
  md reset              Clear all tasks and start fresh
  md reset PROJ-123     Reset task PROJ-123 to 0:00 (keeps it in the list)
  md c 3:45             Show 3:45 in mandays without recording it

Notes:
  Time format is H:MM or HH:MM.
  1 manday = {HOURS_PER_DAY} hours.
  delete removes the task entirely; reset only zeroes out its time.
  The ledger file is set with data_file in config.toml or MD_DATA_FILE."
    )
}
