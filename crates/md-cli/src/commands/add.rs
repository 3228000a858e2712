//! Add command for recording time against the active task.

use std::io::Write;

use anyhow::{Context, Result};
use md_core::duration;
use md_store::JsonStore;

use super::util::mandays_detail;

/// Adds `time` to the active task and saves the ledger.
pub fn run<W: Write>(writer: &mut W, store: &JsonStore, time: &str) -> Result<()> {
    let mut ledger = store.load().context("failed to load ledger")?;
    let task = ledger.active_task().to_string();
    let total = ledger.accumulate(&task, time)?;
    store
        .save(&ledger)
        .context("failed to save ledger, the added time was not recorded")?;

    writeln!(writer, "✓ Added {time} to task \"{task}\"")?;
    writeln!(writer, "  Total time: {}", duration::format(total))?;
    writeln!(writer, "  Mandays: {}", mandays_detail(total))?;
    Ok(())
}
