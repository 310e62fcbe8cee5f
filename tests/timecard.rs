#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kotime::commands::eval;
    use kotime::libs::clock::Clock;
    use kotime::libs::overtime::evaluate;
    use kotime::libs::settings::Settings;
    use kotime::libs::timecard::{first_number, parse_number, Timecard};

    const SNAPSHOT: &str = r#"{
        "year_month": "2026/10",
        "worked_totals": ["", "労働合計", "150.45", "8.00"],
        "weekend_worked": ["-", "8.00"],
        "work_counts": ["", "18"],
        "holiday_counts": ["0", "1.5(3H)", "0", "1"],
        "schedules": ["平日", "有休", "AM有休", "平日", "平日"],
        "daily_totals": ["8.00", "0.00", "4.00", "8.15", ""],
        "time_records": ["", "", "09:00", "18:05", "09:30", ""]
    }"#;

    fn timecard() -> Timecard {
        Timecard::from_json(SNAPSHOT).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_number_reads_leading_number() {
        assert_eq!(parse_number("162.30"), 162.3);
        assert_eq!(parse_number(" 1.5(3H)"), 1.5);
        assert_eq!(parse_number("12.5h"), 12.5);
        assert_eq!(parse_number("-0.45"), -0.45);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("7."), 7.0);
    }

    #[test]
    fn test_parse_number_falls_back_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("(3H)"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("99999999999999999999999"), 0.0);
        assert_eq!(parse_number("1e400"), 1.0);
    }

    #[test]
    fn test_first_number_skips_cells_without_digits() {
        let cells = vec!["".to_string(), "total".to_string(), "3.15".to_string(), "9".to_string()];
        assert_eq!(first_number(&cells), 3.15);
        assert_eq!(first_number(&[]), 0.0);
    }

    #[test]
    fn test_totals() {
        let timecard = timecard();
        assert_eq!(timecard.worked_kot_hours(), 150.45);
        assert_eq!(timecard.weekend_worked_kot_hours(), 8.0);
        assert_eq!(timecard.comp_leave_days(), 1.0);
    }

    #[test]
    fn test_leave_counts_only_completed_days() {
        let mut timecard = timecard();
        // "有休" and "AM有休" both end with the paid leave marker
        assert_eq!(timecard.paid_leave_days(), 2.0);
        assert_eq!(timecard.half_leave_days(), 1.0);

        timecard.daily_totals[1] = String::new();
        assert!(!timecard.is_work_completed_day(1));
        assert_eq!(timecard.paid_leave_days(), 1.0);
    }

    #[test]
    fn test_am_and_pm_half_days_count_separately() {
        let timecard = Timecard {
            schedules: vec!["AM有休 PM有休".to_string(), "PM有休".to_string()],
            daily_totals: vec!["0.00".to_string(), "4.00".to_string()],
            ..Timecard::default()
        };
        assert_eq!(timecard.half_leave_days(), 3.0);
        assert_eq!(timecard.paid_leave_days(), 2.0);
    }

    #[test]
    fn test_half_day_also_counts_as_paid_day() {
        let timecard = Timecard {
            schedules: vec!["AM有休".to_string()],
            daily_totals: vec!["4.00".to_string()],
            ..Timecard::default()
        };
        assert_eq!(timecard.paid_leave_days(), 1.0);
        assert_eq!(timecard.half_leave_days(), 1.0);
        assert_eq!(timecard.working_days(), 1.5);
    }

    #[test]
    fn test_paid_leave_hours() {
        let timecard = timecard();
        // 1.5 days × 8h + 3h
        assert_eq!(timecard.paid_leave_kot_hours(8.0), 15.0);
        // 15h - 2 days × 8h - 1 half day × 4h
        assert_eq!(timecard.hourly_leave_hours(8.0), -5.0);
    }

    #[test]
    fn test_paid_leave_without_hours_part() {
        let timecard = Timecard {
            holiday_counts: vec!["0".to_string(), "2".to_string()],
            ..Timecard::default()
        };
        assert_eq!(timecard.paid_leave_kot_hours(8.0), 16.0);
    }

    #[test]
    fn test_working_days_include_paid_and_half_leave() {
        assert_eq!(timecard().working_days(), 18.0 + 2.0 + 0.5);
    }

    #[test]
    fn test_is_current_month() {
        let timecard = timecard();
        assert!(timecard.is_current_month(date(2026, 10, 19)));
        assert!(!timecard.is_current_month(date(2026, 11, 1)));
        assert!(!timecard.is_current_month(date(2025, 10, 19)));
        assert!(!Timecard::default().is_current_month(date(2026, 10, 19)));
    }

    #[test]
    fn test_today_clocks() {
        let timecard = timecard();

        assert_eq!(timecard.start_clock(date(2026, 10, 1)), Some(Clock::new(9, 0)));
        assert_eq!(timecard.end_clock(date(2026, 10, 1)), Some(Clock::new(18, 5)));
        assert_eq!(timecard.start_clock(date(2026, 10, 2)), Some(Clock::new(9, 30)));
        assert_eq!(timecard.end_clock(date(2026, 10, 2)), None);
        assert_eq!(timecard.start_clock(date(2026, 10, 20)), None);
        assert_eq!(timecard.start_clock(date(2026, 9, 2)), None);
    }

    #[test]
    fn test_attendance_sets_start_only_while_day_is_open() {
        let timecard = timecard();
        let settings = Settings::default();

        assert_eq!(timecard.attendance(&settings, date(2026, 10, 2)).today_start, Some(Clock::new(9, 30)));
        assert_eq!(timecard.attendance(&settings, date(2026, 10, 1)).today_start, None);
        assert_eq!(timecard.attendance(&settings, date(2026, 11, 2)).today_start, None);
    }

    #[test]
    fn test_snapshot_evaluation() {
        let settings = Settings::default();
        let attendance = timecard().attendance(&settings, date(2026, 10, 2));

        assert_eq!(attendance.working_days, 20.5);
        assert_eq!(attendance.paid_leave_kot_hours, 15.0);
        assert_eq!(attendance.leave_detail.hourly_hours, -5.0);

        let evaluation = evaluate(&attendance, &settings).unwrap();
        // 150h45m - (164h + 8h - 15h - 8h)
        assert_eq!(evaluation.overtime.to_signed_clock_string(), "1:45");
        assert_eq!(evaluation.target_leave, Clock::new(18, 30));

        let settings = Settings {
            apply_overtime_to_target: true,
            ..settings
        };
        let evaluation = evaluate(&attendance, &settings).unwrap();
        // 18:30 - 1:45
        assert_eq!(evaluation.target_leave, Clock::new(16, 45));
    }

    #[test]
    fn test_oversized_cells_count_as_zero() {
        let timecard = Timecard {
            worked_totals: vec!["99999999999999999999999".to_string()],
            work_counts: vec!["9223372036854775807".to_string()],
            holiday_counts: vec!["0".to_string(), "99999999999999999999(3H)".to_string()],
            ..Timecard::default()
        };
        assert_eq!(timecard.worked_kot_hours(), 0.0);

        let evaluation = eval::evaluate(&timecard, &Settings::default(), date(2026, 10, 2)).unwrap();
        assert_eq!(evaluation.actual_worked.total_minutes(), 0);
        // only the "3H" part of the paid leave cell is left
        assert_eq!(evaluation.overtime.total_minutes(), 180);
        assert_eq!(evaluation.target_leave, Clock::unknown());
    }

    #[test]
    fn test_empty_snapshot_reads_as_zero() {
        let timecard = Timecard::from_json("{}").unwrap();
        let attendance = timecard.attendance(&Settings::default(), date(2026, 10, 2));

        assert_eq!(attendance.worked_kot_hours, 0.0);
        assert_eq!(attendance.working_days, 0.0);
        assert_eq!(attendance.paid_leave_kot_hours, 0.0);
        assert_eq!(attendance.comp_leave_days, 0.0);
        assert_eq!(attendance.today_start, None);
    }
}
