//! Wall-clock times of day with an explicit "not yet observed" state.
//!
//! A [`Clock`] is either [`Clock::Known`] or [`Clock::Unknown`]. The unknown
//! clock is what the application starts with before today's arrival or
//! departure has been stamped on the timecard, and it renders as `--:--`.
//!
//! Arithmetic wraps the hour modulo 24 and never moves to another day.
//! Rewinding additionally respects the core time: a target leave time is
//! never pulled before 15:00.

use super::duration::{Duration, MINUTES_PER_HOUR};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Earliest hour a rewound leave time may land on.
pub const CORE_TIME_HOUR: i64 = 15;

const HOURS_PER_DAY: i64 = 24;
const UNKNOWN_FIELD: &str = "--";

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("valid clock pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    /// An operation needing a numeric clock was called on [`Clock::Unknown`].
    #[error("Invalid clock.")]
    Invalid,
}

/// A time of day, or the unknown placeholder.
///
/// Fields are signed: [`Clock::elapse_by`] keeps the raw remainder for the
/// minute component, which is negative when a negative duration is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Clock {
    Known {
        hours: i64,
        minutes: i64,
    },
    #[default]
    Unknown,
}

impl Clock {
    pub const fn new(hours: i64, minutes: i64) -> Self {
        Clock::Known { hours, minutes }
    }

    pub const fn unknown() -> Self {
        Clock::Unknown
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, Clock::Known { .. })
    }

    /// Returns `(hours, minutes)` or [`ClockError::Invalid`] for an unknown clock.
    pub fn validate(&self) -> Result<(i64, i64), ClockError> {
        match *self {
            Clock::Known { hours, minutes } => Ok((hours, minutes)),
            Clock::Unknown => Err(ClockError::Invalid),
        }
    }

    /// Moves the clock forward by `duration`.
    ///
    /// The hour carry uses floor division while the minute component is the
    /// plain truncating remainder, so a negative `duration` can leave a
    /// negative minute field. Callers that need `0..60` minutes must only pass
    /// non-negative durations.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Invalid`] when the clock is unknown.
    pub fn elapse_by(&self, duration: Duration) -> Result<Clock, ClockError> {
        let (hours, minutes) = self.validate()?;
        let shifted = minutes.saturating_add(duration.total_minutes());

        let new_hours = hours.saturating_add(shifted.div_euclid(MINUTES_PER_HOUR)) % HOURS_PER_DAY;
        let new_minutes = shifted % MINUTES_PER_HOUR;
        Ok(Clock::new(new_hours, new_minutes))
    }

    /// Moves the clock back by `duration`, never before the core time.
    ///
    /// The floor is checked on the hour alone: when the rewound hour is below
    /// [`CORE_TIME_HOUR`] the result is exactly `15:00`, whatever the minutes.
    /// A negative `duration` moves the clock forward.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Invalid`] when the clock is unknown.
    pub fn rewind_by(&self, duration: Duration) -> Result<Clock, ClockError> {
        let (hours, minutes) = self.validate()?;
        let shifted = minutes.saturating_sub(duration.total_minutes());

        let candidate_hours = hours.saturating_add(shifted.div_euclid(MINUTES_PER_HOUR)) % HOURS_PER_DAY;
        if candidate_hours < CORE_TIME_HOUR {
            return Ok(Clock::new(CORE_TIME_HOUR, 0));
        }

        let mut new_minutes = shifted % MINUTES_PER_HOUR;
        if new_minutes < 0 {
            new_minutes += MINUTES_PER_HOUR;
        }
        Ok(Clock::new(candidate_hours, new_minutes))
    }

    /// Renders `HH:MM`, or `--:--` for the unknown clock.
    pub fn to_display_string(&self) -> String {
        match self {
            Clock::Known { hours, minutes } => format!("{:02}:{:02}", hours, minutes),
            Clock::Unknown => format!("{}:{}", UNKNOWN_FIELD, UNKNOWN_FIELD),
        }
    }

    /// Extracts the first `H:MM` occurrence from a timecard cell.
    ///
    /// Cells carry decorations around the stamp (`"(打刻) 09:12"`); anything
    /// without a stamp yields `None`.
    pub fn parse(text: &str) -> Option<Clock> {
        let captures = CLOCK_RE.captures(text)?;
        let hours = captures[1].parse().ok()?;
        let minutes = captures[2].parse().ok()?;
        Some(Clock::new(hours, minutes))
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}
