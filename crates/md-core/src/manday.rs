//! Conversion from minutes to mandays.

use std::num::NonZeroU32;

use crate::duration;

/// Work hours that make up one manday.
pub const HOURS_PER_DAY: NonZeroU32 = match NonZeroU32::new(8) {
    Some(hours) => hours,
    None => panic!("workday length must be non-zero"),
};

/// Converts minute totals into manday units for a fixed workday length.
///
/// Results are never rounded here; callers pick the display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandayCalculator {
    hours_per_day: f64,
}

impl Default for MandayCalculator {
    fn default() -> Self {
        Self::new(HOURS_PER_DAY)
    }
}

impl MandayCalculator {
    pub fn new(hours_per_day: NonZeroU32) -> Self {
        Self {
            hours_per_day: f64::from(hours_per_day.get()),
        }
    }

    /// `(minutes / 60) / hours_per_day`, unrounded.
    pub fn to_mandays(&self, total_minutes: u64) -> f64 {
        duration::to_hours(total_minutes) / self.hours_per_day
    }
}

/// Converts minutes to mandays using [`HOURS_PER_DAY`].
pub fn to_mandays(total_minutes: u64) -> f64 {
    MandayCalculator::default().to_mandays(total_minutes)
}
