//! Timecard snapshot reader.
//!
//! A [`Timecard`] holds the texts of the KOT timecard page elements the
//! overtime calculation depends on, grouped by the element class they were
//! collected from. Producing the snapshot (a browser extension, a saved page
//! run through a selector tool, a hand-written file) is outside this crate.
//!
//! Every reading is tolerant: a missing element or a text that does not parse
//! as a number counts as `0`. A half-loaded page therefore under-counts
//! instead of failing the whole evaluation.

use super::clock::Clock;
use super::duration::Duration;
use super::overtime::{Attendance, LeaveDetail};
use super::settings::Settings;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Index of the paid leave cell among the `holiday_count` cells.
pub const PAID_LEAVE_COUNT_INDEX: usize = 1;
/// Index of the compensatory leave cell among the `holiday_count` cells.
pub const COMP_LEAVE_COUNT_INDEX: usize = 3;

const PAID_LEAVE_MARKER: &str = "有休";
const AM_HALF_LEAVE_MARKER: &str = "AM有休";
const PM_HALF_LEAVE_MARKER: &str = "PM有休";

static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))").expect("valid number prefix pattern"));
static LEAVE_HOURS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)H").expect("valid leave hours pattern"));

/// Element texts captured from one timecard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timecard {
    /// Month picker value, `YYYY/MM`.
    pub year_month: String,
    /// Cells of the "worked total, leave excluded" column.
    pub worked_totals: Vec<String>,
    /// Cells of the "scheduled rest day work" column.
    pub weekend_worked: Vec<String>,
    /// `work_count` cells; the first numeric one is the weekday count.
    pub work_counts: Vec<String>,
    /// `holiday_count` cells, e.g. `"1.5(3H)"` for paid leave.
    pub holiday_counts: Vec<String>,
    /// Per-day schedule labels, one per day row.
    pub schedules: Vec<String>,
    /// Per-day worked totals, header rows excluded.
    pub daily_totals: Vec<String>,
    /// Start/end stamp cells; day `d` starts at `2d` and ends at `2d + 1`.
    pub time_records: Vec<String>,
}

/// Parses the leading decimal number of `text`, the way a lenient form
/// reader would: `"162.30 h"` → `162.3`, `" 1.5(3H)"` → `1.5`.
///
/// Returns `0.0` when the text has no numeric prefix or the number is too
/// large to count in minutes.
pub fn parse_number(text: &str) -> f64 {
    let value = NUMBER_PREFIX_RE
        .captures(text)
        .and_then(|captures| captures[1].parse::<f64>().ok());

    match value {
        Some(value) if Duration::from_hours(value).is_ok() => value,
        _ => {
            tracing::debug!(text, "no usable numeric prefix, counting as 0");
            0.0
        }
    }
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Value of the first cell that contains a digit, or `0`.
pub fn first_number(cells: &[String]) -> f64 {
    cells.iter().find(|cell| has_digit(cell)).map_or(0.0, |cell| parse_number(cell))
}

fn number_if_digit(cell: Option<&String>) -> f64 {
    match cell {
        Some(text) if has_digit(text) => parse_number(text),
        _ => 0.0,
    }
}

impl Timecard {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn worked_kot_hours(&self) -> f64 {
        first_number(&self.worked_totals)
    }

    pub fn weekend_worked_kot_hours(&self) -> f64 {
        first_number(&self.weekend_worked)
    }

    /// A day row counts once its worked total has been filled in.
    pub fn is_work_completed_day(&self, day_index: usize) -> bool {
        self.daily_totals.get(day_index).is_some_and(|text| has_digit(text))
    }

    fn completed_schedules(&self) -> impl Iterator<Item = &str> {
        self.schedules
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_work_completed_day(*i))
            .map(|(_, label)| label.trim())
    }

    /// Completed days whose label ends with the paid leave marker.
    ///
    /// `AM有休` and `PM有休` end with the marker as well, so a half day is
    /// counted here once more on top of [`Timecard::half_leave_days`]. The
    /// timecard page figures are read the same way.
    pub fn paid_leave_days(&self) -> f64 {
        self.completed_schedules()
            .filter(|label| label.ends_with(PAID_LEAVE_MARKER))
            .count() as f64
    }

    /// Completed days with half-day paid leave; AM and PM count separately.
    pub fn half_leave_days(&self) -> f64 {
        self.completed_schedules()
            .map(|label| {
                usize::from(label.contains(AM_HALF_LEAVE_MARKER)) + usize::from(label.contains(PM_HALF_LEAVE_MARKER))
            })
            .sum::<usize>() as f64
    }

    /// Paid leave as hours: `days × work time + hours` from a `"1.5(3H)"` cell.
    pub fn paid_leave_kot_hours(&self, work_time_hours: f64) -> f64 {
        let Some(text) = self.holiday_counts.get(PAID_LEAVE_COUNT_INDEX) else {
            tracing::debug!("paid leave cell missing, counting as 0");
            return 0.0;
        };

        let days = number_if_digit(Some(text));
        let hours = LEAVE_HOURS_RE
            .captures(text)
            .and_then(|captures| captures[1].parse::<f64>().ok())
            .unwrap_or(0.0);

        days * work_time_hours + hours
    }

    /// Hourly paid leave, i.e. what remains of the paid leave total once
    /// full and half days are taken out.
    pub fn hourly_leave_hours(&self, work_time_hours: f64) -> f64 {
        self.paid_leave_kot_hours(work_time_hours)
            - self.paid_leave_days() * work_time_hours
            - self.half_leave_days() * work_time_hours * 0.5
    }

    pub fn comp_leave_days(&self) -> f64 {
        number_if_digit(self.holiday_counts.get(COMP_LEAVE_COUNT_INDEX))
    }

    /// Weekdays worked plus the paid and half-paid leave days the page
    /// subtracts from that count.
    pub fn working_days(&self) -> f64 {
        first_number(&self.work_counts) + self.paid_leave_days() + self.half_leave_days() * 0.5
    }

    /// Whether the card shows the month `today` falls in.
    pub fn is_current_month(&self, today: NaiveDate) -> bool {
        let Some((year, month)) = self.year_month.trim().split_once('/') else {
            return false;
        };
        let (Ok(year), Ok(month)) = (year.trim().parse::<i32>(), month.trim().parse::<u32>()) else {
            return false;
        };
        year == today.year() && month == today.month()
    }

    fn record_clock(&self, index: usize) -> Option<Clock> {
        self.time_records.get(index).and_then(|text| Clock::parse(text))
    }

    /// Today's stamped arrival, if the card is for the current month.
    pub fn start_clock(&self, today: NaiveDate) -> Option<Clock> {
        if !self.is_current_month(today) {
            return None;
        }
        self.record_clock(today.day() as usize * 2)
    }

    /// Today's stamped departure, if the card is for the current month.
    pub fn end_clock(&self, today: NaiveDate) -> Option<Clock> {
        if !self.is_current_month(today) {
            return None;
        }
        self.record_clock(today.day() as usize * 2 + 1)
    }

    pub fn leave_detail(&self, work_time_hours: f64) -> LeaveDetail {
        LeaveDetail {
            paid_days: self.paid_leave_days(),
            half_days: self.half_leave_days(),
            hourly_hours: self.hourly_leave_hours(work_time_hours),
        }
    }

    /// Collects the engine inputs for `today`.
    pub fn attendance(&self, settings: &Settings, today: NaiveDate) -> Attendance {
        let work = settings.work_time_hours;
        let today_start = match (self.start_clock(today), self.end_clock(today)) {
            (Some(start), None) => Some(start),
            _ => None,
        };

        let attendance = Attendance {
            worked_kot_hours: self.worked_kot_hours(),
            working_days: self.working_days(),
            weekend_worked_kot_hours: self.weekend_worked_kot_hours(),
            paid_leave_kot_hours: self.paid_leave_kot_hours(work),
            comp_leave_days: self.comp_leave_days(),
            today_start,
            leave_detail: self.leave_detail(work),
        };
        tracing::debug!(?attendance, %today, "read attendance from timecard");
        attendance
    }
}
