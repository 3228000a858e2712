//! CLI subcommand implementations.

pub mod add;
pub mod calc;
pub mod delete;
pub mod reset;
pub mod summary;
pub mod switch;
mod util;
