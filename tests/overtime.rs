#[cfg(test)]
mod tests {
    use kotime::libs::clock::{Clock, ClockError};
    use kotime::libs::overtime::{evaluate, target_leave_time, Attendance, EngineError};
    use kotime::libs::duration::Duration;
    use kotime::libs::settings::Settings;

    fn month_of_twenty_days(worked_kot_hours: f64) -> Attendance {
        Attendance {
            worked_kot_hours,
            working_days: 20.0,
            ..Attendance::default()
        }
    }

    #[test]
    fn test_end_to_end_month() {
        let evaluation = evaluate(&month_of_twenty_days(162.30), &Settings::default()).unwrap();

        assert_eq!(evaluation.actual_worked.total_minutes(), 162 * 60 + 30);
        assert_eq!(evaluation.required_worked.total_minutes(), 160 * 60);
        assert_eq!(evaluation.overtime.total_minutes(), 150);
        assert_eq!(evaluation.overtime.to_signed_clock_string(), "2:30");
        assert_eq!(evaluation.target_leave, Clock::Unknown);
    }

    #[test]
    fn test_under_worked_month_is_negative() {
        let evaluation = evaluate(&month_of_twenty_days(159.20), &Settings::default()).unwrap();
        assert_eq!(evaluation.overtime.total_minutes(), -40);
        assert_eq!(evaluation.overtime.to_signed_clock_string(), "-0:40");
    }

    #[test]
    fn test_required_worked_accounts_for_every_leave_category() {
        let attendance = Attendance {
            worked_kot_hours: 140.00,
            working_days: 19.5,
            weekend_worked_kot_hours: 8.0,
            paid_leave_kot_hours: 12.0,
            comp_leave_days: 1.0,
            ..Attendance::default()
        };
        let evaluation = evaluate(&attendance, &Settings::default()).unwrap();

        // 19.5×8h + 8h - 12h - 1×8h = 144h
        assert_eq!(evaluation.required_worked.total_minutes(), 144 * 60);
        assert_eq!(evaluation.overtime.to_signed_clock_string(), "-4:00");
    }

    #[test]
    fn test_paid_leave_is_read_as_decimal_hour_code() {
        let attendance = Attendance {
            worked_kot_hours: 0.0,
            working_days: 1.0,
            paid_leave_kot_hours: 3.30,
            ..Attendance::default()
        };
        let evaluation = evaluate(&attendance, &Settings::default()).unwrap();
        assert_eq!(evaluation.required_worked.total_minutes(), 8 * 60 - 210);
    }

    #[test]
    fn test_target_leave_from_start_and_office_time() {
        let attendance = Attendance {
            today_start: Some(Clock::new(10, 30)),
            ..month_of_twenty_days(162.30)
        };
        let evaluation = evaluate(&attendance, &Settings::default()).unwrap();
        assert_eq!(evaluation.target_leave, Clock::new(19, 30));
    }

    #[test]
    fn test_target_leave_pulled_by_overtime() {
        let settings = Settings {
            apply_overtime_to_target: true,
            ..Settings::default()
        };
        let attendance = Attendance {
            today_start: Some(Clock::new(9, 0)),
            ..month_of_twenty_days(162.30)
        };
        let evaluation = evaluate(&attendance, &settings).unwrap();
        assert_eq!(evaluation.target_leave, Clock::new(15, 30));
    }

    #[test]
    fn test_target_leave_pushed_by_negative_overtime() {
        let settings = Settings {
            apply_overtime_to_target: true,
            ..Settings::default()
        };
        let target = target_leave_time(Clock::new(9, 0), Duration::from_minutes(-45), &settings).unwrap();
        assert_eq!(target, Clock::new(18, 45));
    }

    #[test]
    fn test_target_leave_never_before_core_time() {
        let settings = Settings {
            apply_overtime_to_target: true,
            ..Settings::default()
        };
        let target = target_leave_time(Clock::new(9, 0), Duration::from_minutes(5 * 60), &settings).unwrap();
        assert_eq!(target, Clock::new(15, 0));
    }

    #[test]
    fn test_unknown_start_clock_is_an_error() {
        let attendance = Attendance {
            today_start: Some(Clock::Unknown),
            ..Attendance::default()
        };
        let result = evaluate(&attendance, &Settings::default());
        assert_eq!(result, Err(EngineError::Clock(ClockError::Invalid)));
    }

    #[test]
    fn test_non_finite_reading_is_an_error() {
        let attendance = Attendance {
            worked_kot_hours: f64::NAN,
            ..Attendance::default()
        };
        assert!(matches!(evaluate(&attendance, &Settings::default()), Err(EngineError::Duration(_))));
    }

    #[test]
    fn test_missing_readings_evaluate_to_zero() {
        let evaluation = evaluate(&Attendance::default(), &Settings::default()).unwrap();
        assert_eq!(evaluation.overtime.to_signed_clock_string(), "0:00");
        assert_eq!(evaluation.target_leave.to_display_string(), "--:--");
    }

    #[test]
    fn test_breakdown_lists_intermediate_values() {
        let evaluation = evaluate(&month_of_twenty_days(162.30), &Settings::default()).unwrap();
        let breakdown = evaluation.breakdown();

        assert!(breakdown.contains("Worked total (leave excluded): 162.3"));
        assert!(breakdown.contains("Actual worked: 162.30 h (9750 min)"));
        assert!(breakdown.contains("Required worked: 160.00 h (9600 min)"));
        assert!(breakdown.contains("= 20×8 + 0 - (0 + 0×8)"));
        assert!(breakdown.contains("Overtime: 2:30 (150 min)"));
        assert!(breakdown.contains("Target leave: --:--"));
    }

    #[test]
    fn test_evaluation_serializes_to_json() {
        let evaluation = evaluate(&month_of_twenty_days(162.30), &Settings::default()).unwrap();
        let json = serde_json::to_value(evaluation).unwrap();

        assert_eq!(json["overtime"], 150);
        assert_eq!(json["required_worked"], 9600);
        assert_eq!(json["target_leave"]["state"], "unknown");
        assert_eq!(json["settings"]["WORKTIME"], 8.0);
    }
}
