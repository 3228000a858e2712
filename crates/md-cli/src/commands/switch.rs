//! Switch command for changing the active task.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use md_core::{SwitchOutcome, duration};
use md_store::JsonStore;

use super::util::mandays_short;

#[derive(Debug, Args)]
pub struct SwitchArgs {
    /// Task to make active.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

pub fn run<W: Write>(writer: &mut W, store: &JsonStore, args: &SwitchArgs) -> Result<()> {
    let mut ledger = store.load().context("failed to load ledger")?;
    let outcome = ledger.switch_to(&args.name);
    store
        .save(&ledger)
        .context("failed to save ledger, the active task was not changed")?;

    match outcome {
        SwitchOutcome::Existing { minutes } => {
            writeln!(writer, "✓ Switched to task \"{}\"", args.name)?;
            writeln!(writer, "  Current time: {}", duration::format(minutes))?;
            writeln!(writer, "  Mandays: {}", mandays_short(minutes))?;
        }
        SwitchOutcome::New => {
            writeln!(writer, "✓ Switched to new task \"{}\"", args.name)?;
            writeln!(writer, "  No time recorded yet")?;
        }
    }
    Ok(())
}
