//! Summary command listing every task with its time and mandays.

use std::io::Write;

use anyhow::{Context, Result};
use md_core::{Summary, duration};
use md_store::JsonStore;

use super::util::mandays_detail;

/// Prints the task overview. Never modifies the ledger.
pub fn run<W: Write>(writer: &mut W, store: &JsonStore) -> Result<()> {
    let ledger = store.load().context("failed to load ledger")?;

    let Summary::Tasks { entries, total } = ledger.summarize() else {
        writeln!(writer, "No tasks recorded yet.")?;
        return Ok(());
    };

    writeln!(writer)?;
    writeln!(writer, "=== TASK OVERVIEW ===")?;
    writeln!(writer)?;
    for entry in entries {
        let marker = if entry.is_active { " <- ACTIVE" } else { "" };
        writeln!(writer, "{}{marker}", entry.name)?;
        writeln!(writer, "  Time: {}", duration::format(entry.minutes))?;
        writeln!(writer, "  Mandays: {}", mandays_detail(entry.minutes))?;
        writeln!(writer)?;
    }

    if let Some(total) = total {
        writeln!(writer, "--- TOTAL ---")?;
        writeln!(writer, "  Time: {}", duration::format(total))?;
        writeln!(writer, "  Mandays: {}", mandays_detail(total))?;
    }

    Ok(())
}
