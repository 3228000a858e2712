//! Delete command for removing a task and its time.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use md_core::{TaskNotFound, duration, to_mandays};
use md_store::JsonStore;

use super::util::fixed;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task to delete.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

/// Deletes the task. A missing task is reported, not treated as a failure.
pub fn run<W: Write>(writer: &mut W, store: &JsonStore, args: &DeleteArgs) -> Result<()> {
    let mut ledger = store.load().context("failed to load ledger")?;
    let previous_active = ledger.active_task().to_string();

    let minutes = match ledger.delete_task(&args.name) {
        Ok(minutes) => minutes,
        Err(TaskNotFound { name }) => {
            writeln!(writer, "Task \"{name}\" does not exist")?;
            return Ok(());
        }
    };
    store
        .save(&ledger)
        .context("failed to save ledger, the task was not deleted")?;

    writeln!(writer, "✓ Task \"{}\" has been deleted", args.name)?;
    writeln!(
        writer,
        "  Deleted time: {} ({} MD)",
        duration::format(minutes),
        fixed(to_mandays(minutes), 2)
    )?;
    if ledger.active_task() != previous_active {
        writeln!(writer, "  Active task is now \"{}\"", ledger.active_task())?;
    }
    Ok(())
}
