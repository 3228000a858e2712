//! Parsing and formatting of `H:MM` durations.
//!
//! Durations are always whole, non-negative minute counts. The hours part of
//! the input has no upper bound beyond what fits in a `u64` minute count.

use std::sync::LazyLock;

use thiserror::Error;

/// Accepted input shape: one or more ASCII digits, a colon, exactly two digits.
static DURATION_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9]+):([0-9]{2})$").expect("duration pattern is valid")
});

const MINUTES_PER_HOUR: u64 = 60;

/// Errors produced while parsing a duration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input does not have the `H:MM` / `HH:MM` shape.
    #[error("invalid time format {input:?}. Use H:MM or HH:MM")]
    Format { input: String },

    /// The minutes component is 60 or more.
    #[error("minutes must be between 0-59, got {minutes}")]
    MinutesOutOfRange { minutes: u64 },

    /// The hours component does not fit in a minute count.
    #[error("duration {input:?} is too large")]
    Overflow { input: String },
}

impl DurationError {
    /// Whether this is a range failure (the shape was fine, the value was not).
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::MinutesOutOfRange { .. } | Self::Overflow { .. })
    }
}

/// Parses `H:MM` or `HH:MM` into a total minute count.
pub fn parse(input: &str) -> Result<u64, DurationError> {
    let Some(caps) = DURATION_RE.captures(input) else {
        return Err(DurationError::Format {
            input: input.to_string(),
        });
    };

    let overflow = || DurationError::Overflow {
        input: input.to_string(),
    };

    // Two ASCII digits always fit; the hours may not.
    let minutes: u64 = caps[2].parse().map_err(|_| overflow())?;
    if minutes >= MINUTES_PER_HOUR {
        return Err(DurationError::MinutesOutOfRange { minutes });
    }

    let hours: u64 = caps[1].parse().map_err(|_| overflow())?;
    hours
        .checked_mul(MINUTES_PER_HOUR)
        .and_then(|m| m.checked_add(minutes))
        .ok_or_else(overflow)
}

/// Formats a minute count as `H:MM`.
///
/// Hours are unpadded and unbounded; minutes are always two digits.
pub fn format(total_minutes: u64) -> String {
    let hours = total_minutes / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;
    format!("{hours}:{minutes:02}")
}

/// Converts a minute count to fractional hours.
#[expect(
    clippy::cast_precision_loss,
    reason = "minute totals stay far below 2^52"
)]
pub fn to_hours(total_minutes: u64) -> f64 {
    total_minutes as f64 / 60.0
}
