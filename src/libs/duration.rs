//! Signed, minute-granular durations and their KOT text encodings.
//!
//! A [`Duration`] stores nothing but a signed count of minutes. Hours and
//! minutes are derived on demand, which keeps addition and subtraction closed
//! and exact no matter how far a monthly balance drifts into the negative.
//!
//! ## Encodings
//!
//! Two textual forms are used across the application:
//!
//! - **Decimal-hour code** (`"1.30"`): the integer part is hours and the two
//!   fractional digits are *raw minutes*, not a fraction of an hour. This is
//!   the format the timecard prints its totals in.
//! - **Signed clock string** (`"-0:59"`, `"2:30"`): used for the overtime
//!   balance shown in the page title and the widget.
//!
//! ## Examples
//!
//! ```rust
//! use kotime::libs::duration::Duration;
//!
//! let worked = Duration::from_decimal_hour_code(162.30)?;
//! let required = Duration::from_hours(160.0)?;
//! assert_eq!((worked - required).to_signed_clock_string(), "2:30");
//! # Ok::<(), kotime::libs::duration::DurationError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Number of minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Errors raised while building a [`Duration`] from a floating point reading.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DurationError {
    /// The reading was NaN or infinite.
    #[error("cannot build a duration from non-finite value {0}")]
    NonFinite(f64),
    /// The reading does not fit in a signed 64-bit count of minutes.
    #[error("duration of {0} hours is out of range")]
    OutOfRange(f64),
}

// Smallest magnitude that no longer fits in an i64 (2^63).
const I64_LIMIT: f64 = i64::MAX as f64;

/// An elapsed quantity of time, signed, counted in whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    total_minutes: i64,
}

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Duration = Duration { total_minutes: 0 };

    pub const fn from_minutes(total_minutes: i64) -> Self {
        Self { total_minutes }
    }

    /// Builds a duration from a plain number of hours (`1.5` → 90 minutes).
    ///
    /// The product is rounded to the nearest whole minute, so configured
    /// values such as `7.75` hours land exactly on `465` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::NonFinite`] for NaN or infinite input and
    /// [`DurationError::OutOfRange`] when the minutes do not fit in an `i64`.
    pub fn from_hours(hours: f64) -> Result<Self, DurationError> {
        if !hours.is_finite() {
            return Err(DurationError::NonFinite(hours));
        }
        let minutes = (hours * MINUTES_PER_HOUR as f64).round();
        if minutes.abs() >= I64_LIMIT {
            return Err(DurationError::OutOfRange(hours));
        }
        Ok(Self::from_minutes(minutes as i64))
    }

    /// Decodes a KOT decimal-hour code (`1.30` → 90 minutes).
    ///
    /// The integer part is taken with `floor` and the fractional part is read
    /// as base-100 minutes: `floor(v) * 60 + round((v - floor(v)) * 100)`.
    /// Negative codes follow the same formula, so `-1.30` decodes to
    /// `-120 + 70 = -50` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::NonFinite`] for NaN or infinite input and
    /// [`DurationError::OutOfRange`] when the minutes do not fit in an `i64`.
    pub fn from_decimal_hour_code(value: f64) -> Result<Self, DurationError> {
        if !value.is_finite() {
            return Err(DurationError::NonFinite(value));
        }
        let whole = value.floor();
        if whole.abs() >= I64_LIMIT {
            return Err(DurationError::OutOfRange(value));
        }
        let minutes = ((value - whole) * 100.0).round() as i64;
        (whole as i64)
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|hours| hours.checked_add(minutes))
            .map(Self::from_minutes)
            .ok_or(DurationError::OutOfRange(value))
    }

    pub const fn total_minutes(&self) -> i64 {
        self.total_minutes
    }

    /// Hour component, truncated toward zero (`-59` minutes → `0`).
    pub const fn hours(&self) -> i64 {
        self.total_minutes / MINUTES_PER_HOUR
    }

    /// Minute component; carries the sign of the whole duration (`-70` → `-10`).
    pub const fn minutes(&self) -> i64 {
        self.total_minutes % MINUTES_PER_HOUR
    }

    /// Renders the decimal-hour code with two decimals (90 minutes → `"1.30"`).
    pub fn to_decimal_hour_code(&self) -> String {
        let code = self.hours() as f64 + self.minutes() as f64 / 100.0;
        format!("{:.2}", code)
    }

    /// Renders `[-]H:MM`.
    ///
    /// The leading `-` is only printed for `-60 < total < 0`; below that the
    /// hour component is already negative and carries the sign itself.
    ///
    /// ```rust
    /// use kotime::libs::duration::Duration;
    ///
    /// assert_eq!(Duration::from_minutes(-59).to_signed_clock_string(), "-0:59");
    /// assert_eq!(Duration::from_minutes(-60).to_signed_clock_string(), "-1:00");
    /// assert_eq!(Duration::from_minutes(-70).to_signed_clock_string(), "-1:10");
    /// ```
    pub fn to_signed_clock_string(&self) -> String {
        let sign = if self.total_minutes < 0 && self.total_minutes > -MINUTES_PER_HOUR { "-" } else { "" };
        format!("{}{}:{:02}", sign, self.hours(), self.minutes().abs())
    }

    /// Sum of both durations, saturating at the `i64` bounds.
    pub const fn add(self, other: Duration) -> Duration {
        Duration::from_minutes(self.total_minutes.saturating_add(other.total_minutes))
    }

    /// Difference of both durations, saturating at the `i64` bounds.
    pub const fn subtract(self, other: Duration) -> Duration {
        Duration::from_minutes(self.total_minutes.saturating_sub(other.total_minutes))
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::add(self, rhs)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.subtract(rhs)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_signed_clock_string())
    }
}
