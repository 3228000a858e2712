//! Calc command: converts a time to hours and mandays without touching the ledger.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use md_core::duration;

use super::util::{fixed, mandays_detail};

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Time to convert (H:MM or HH:MM).
    pub time: String,
}

pub fn run<W: Write>(writer: &mut W, args: &CalcArgs) -> Result<()> {
    let minutes = duration::parse(&args.time)?;

    writeln!(writer, "Time: {}", duration::format(minutes))?;
    writeln!(writer, "Hours: {} hours", fixed(duration::to_hours(minutes), 2))?;
    writeln!(writer, "Mandays: {}", mandays_detail(minutes))?;
    Ok(())
}
