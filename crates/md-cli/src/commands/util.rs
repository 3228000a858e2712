//! Shared formatting for CLI commands.

use md_core::to_mandays;

/// Renders `value` with `places` decimals, rounding halves away from zero.
///
/// Exact ties such as `0.3125` at three places render as `0.313`.
pub fn fixed(value: f64, places: u8) -> String {
    let factor = 10_f64.powi(i32::from(places));
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", usize::from(places), rounded)
}

/// `0.313 MD (0.31 MD)` for the given minutes.
pub fn mandays_detail(minutes: u64) -> String {
    let mandays = to_mandays(minutes);
    format!("{} MD ({} MD)", fixed(mandays, 3), fixed(mandays, 2))
}

/// `0.313 MD` for the given minutes.
pub fn mandays_short(minutes: u64) -> String {
    format!("{} MD", fixed(to_mandays(minutes), 3))
}
