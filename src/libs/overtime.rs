//! Overtime and target leave time calculation.
//!
//! This module is the single place where attendance readings are turned into
//! the two figures the application reports: the accumulated overtime for the
//! month and the wall-clock time at which the worker may leave today.
//!
//! ## Formulas
//!
//! ```text
//! actual    = worked total (decimal-hour code)
//! required  = working days × work time + weekend work
//!           - paid leave (decimal-hour code) - comp leave days × work time
//! overtime  = actual - required
//! target    = today's start + office time
//!           [- overtime, never before 15:00]   when the flag is set
//! ```
//!
//! Weekend work is part of the requirement as well as the worked total, so it
//! neither adds to nor subtracts from the overtime balance.
//!
//! ## Usage
//!
//! ```rust
//! use kotime::libs::overtime::{evaluate, Attendance};
//! use kotime::libs::settings::Settings;
//!
//! let attendance = Attendance {
//!     worked_kot_hours: 162.30,
//!     working_days: 20.0,
//!     ..Attendance::default()
//! };
//! let evaluation = evaluate(&attendance, &Settings::default())?;
//! assert_eq!(evaluation.overtime.to_signed_clock_string(), "2:30");
//! assert_eq!(evaluation.target_leave.to_display_string(), "--:--");
//! # Ok::<(), kotime::libs::overtime::EngineError>(())
//! ```

use super::clock::{Clock, ClockError};
use super::duration::{Duration, DurationError};
use super::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Duration(#[from] DurationError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Leave counts behind [`Attendance::paid_leave_kot_hours`].
///
/// Only shown in the diagnostic breakdown; the arithmetic uses the combined
/// paid leave reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveDetail {
    pub paid_days: f64,
    pub half_days: f64,
    pub hourly_hours: f64,
}

/// Scalar readings taken from the timecard.
///
/// Readings suffixed `_kot_hours` are decimal-hour codes (`1.30` is 1 h 30 min);
/// day counts are plain numbers and may be fractional (half days).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Worked total excluding every leave category.
    pub worked_kot_hours: f64,
    /// Weekdays counted as worked, paid and half-paid leave days included.
    pub working_days: f64,
    /// Work on scheduled rest days.
    pub weekend_worked_kot_hours: f64,
    /// Whole-day, half-day and hourly paid leave combined.
    pub paid_leave_kot_hours: f64,
    pub comp_leave_days: f64,
    /// Today's arrival; set only while today's departure is not recorded.
    pub today_start: Option<Clock>,
    pub leave_detail: LeaveDetail,
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub actual_worked: Duration,
    pub required_worked: Duration,
    pub overtime: Duration,
    pub target_leave: Clock,
    pub attendance: Attendance,
    pub settings: Settings,
}

/// Runs the overtime pipeline for one attendance snapshot.
///
/// # Errors
///
/// [`EngineError::Duration`] when a reading is not finite and
/// [`EngineError::Clock`] when `today_start` is the unknown clock.
pub fn evaluate(attendance: &Attendance, settings: &Settings) -> Result<Evaluation, EngineError> {
    let work = settings.work_time_hours;

    let actual_worked = Duration::from_decimal_hour_code(attendance.worked_kot_hours)?;

    let required_worked = Duration::from_hours(attendance.working_days * work)?
        .add(Duration::from_hours(attendance.weekend_worked_kot_hours)?)
        .subtract(Duration::from_decimal_hour_code(attendance.paid_leave_kot_hours)?)
        .subtract(Duration::from_hours(attendance.comp_leave_days * work)?);

    let overtime = actual_worked - required_worked;
    tracing::debug!(
        actual = actual_worked.total_minutes(),
        required = required_worked.total_minutes(),
        overtime = overtime.total_minutes(),
        "computed overtime"
    );

    let target_leave = match attendance.today_start {
        Some(start) => target_leave_time(start, overtime, settings)?,
        None => Clock::unknown(),
    };

    Ok(Evaluation {
        actual_worked,
        required_worked,
        overtime,
        target_leave,
        attendance: *attendance,
        settings: *settings,
    })
}

/// Today's start plus the office time, optionally pulled by `overtime`.
pub fn target_leave_time(start: Clock, overtime: Duration, settings: &Settings) -> Result<Clock, EngineError> {
    let mut target = start.elapse_by(Duration::from_hours(settings.office_time_hours)?)?;
    if settings.apply_overtime_to_target {
        target = target.rewind_by(overtime)?;
    }
    tracing::debug!(%start, %target, apply_overtime = settings.apply_overtime_to_target, "computed target leave time");
    Ok(target)
}

impl Evaluation {
    /// Multi-line listing of every reading and intermediate value.
    pub fn breakdown(&self) -> String {
        let a = &self.attendance;
        let work = self.settings.work_time_hours;
        let mut text = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(text, "Worked total (leave excluded): {}", a.worked_kot_hours);
        let _ = writeln!(text, "Working days (paid/half leave included): {}", a.working_days);
        let _ = writeln!(text, "Paid leave total (full/half/hourly): {}", a.paid_leave_kot_hours);
        let _ = writeln!(text, "Paid leave days: {}", a.leave_detail.paid_days);
        let _ = writeln!(text, "Half leave days: {}", a.leave_detail.half_days);
        let _ = writeln!(text, "Hourly leave: {}", a.leave_detail.hourly_hours);
        let _ = writeln!(text, "Weekend work: {}", a.weekend_worked_kot_hours);
        let _ = writeln!(text, "Compensatory leave days: {}", a.comp_leave_days);
        let _ = writeln!(text, "----------------------------------------");
        let _ = writeln!(
            text,
            "Actual worked: {} h ({} min)",
            self.actual_worked.to_decimal_hour_code(),
            self.actual_worked.total_minutes()
        );
        let _ = writeln!(text, "  └ formula: worked total (leave excluded)");
        let _ = writeln!(
            text,
            "Required worked: {} h ({} min)",
            self.required_worked.to_decimal_hour_code(),
            self.required_worked.total_minutes()
        );
        let _ = writeln!(
            text,
            "  └ formula: (working days × work time + weekend work) - (paid leave total + comp leave days × work time)"
        );
        let _ = writeln!(
            text,
            "    = {}×{} + {} - ({} + {}×{})",
            a.working_days, work, a.weekend_worked_kot_hours, a.paid_leave_kot_hours, a.comp_leave_days, work
        );
        let _ = writeln!(
            text,
            "Overtime: {} ({} min)",
            self.overtime.to_signed_clock_string(),
            self.overtime.total_minutes()
        );
        let _ = writeln!(text, "  └ formula: actual worked - required worked");
        let start = a.today_start.unwrap_or_default();
        let _ = write!(
            text,
            "Target leave: {} (start {} + office time {} h{})",
            self.target_leave,
            start,
            self.settings.office_time_hours,
            if self.settings.apply_overtime_to_target { " - overtime, not before 15:00" } else { "" }
        );

        text
    }
}
