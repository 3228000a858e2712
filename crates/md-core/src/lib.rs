//! Core domain logic for the manday tracker.
//!
//! This crate contains the pure parts of the tracker:
//! - Duration codec: `H:MM` strings to and from minute counts
//! - Manday conversion: minutes to units of a fixed-length workday
//! - Ledger: per-task minute totals and the active task
//!
//! Nothing here performs I/O. Loading and saving a [`Ledger`] is up to the caller.

pub mod duration;
mod ledger;
pub mod manday;

pub use duration::DurationError;
pub use ledger::{
    DEFAULT_TASK, InvalidLedger, Ledger, ResetOutcome, Summary, SummaryEntries, SummaryEntry,
    SwitchOutcome, TaskNotFound,
};
pub use manday::{HOURS_PER_DAY, MandayCalculator, to_mandays};
