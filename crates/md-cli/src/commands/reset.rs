//! Reset command for zeroing one task or clearing the ledger.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use md_core::{ResetOutcome, TaskNotFound, duration, to_mandays};
use md_store::JsonStore;

use super::util::fixed;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Task to reset to 0:00. Resets every task when omitted.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: Option<String>,
}

pub fn run<W: Write>(writer: &mut W, store: &JsonStore, args: &ResetArgs) -> Result<()> {
    let mut ledger = store.load().context("failed to load ledger")?;

    let outcome = match ledger.reset_task(args.name.as_deref()) {
        Ok(outcome) => outcome,
        Err(TaskNotFound { name }) => {
            writeln!(writer, "Task \"{name}\" does not exist")?;
            return Ok(());
        }
    };
    store
        .save(&ledger)
        .context("failed to save ledger, the reset was not recorded")?;

    match outcome {
        ResetOutcome::Task { previous_minutes } => {
            let name = args.name.as_deref().unwrap_or_default();
            writeln!(writer, "✓ Task \"{name}\" has been reset to 0:00")?;
            writeln!(
                writer,
                "  Cleared time: {} ({} MD)",
                duration::format(previous_minutes),
                fixed(to_mandays(previous_minutes), 2)
            )?;
        }
        ResetOutcome::All { removed } => {
            writeln!(writer, "✓ All tasks have been reset")?;
            writeln!(writer, "  Tasks removed: {removed}")?;
        }
    }
    Ok(())
}
