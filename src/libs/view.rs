use super::messages::Message;
use super::overtime::Evaluation;
use super::render::widget_clock;
use super::settings::Settings;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn evaluation(evaluation: &Evaluation) {
        let mut table = Table::new();

        table.add_row(row![Message::OvertimeLabel, evaluation.overtime.to_signed_clock_string()]);
        table.add_row(row![Message::TargetLeaveLabel, widget_clock(&evaluation.target_leave)]);
        table.printstd();
    }

    pub fn settings(settings: &Settings) {
        let display = format!("{} ({})", settings.display, settings.display.code());
        let apply_overtime = if settings.apply_overtime_to_target { "on" } else { "off" };
        let mut table = Table::new();

        table.add_row(row![Message::SettingsOfficeTime, settings.office_time_hours]);
        table.add_row(row![Message::SettingsWorkTime, settings.work_time_hours]);
        table.add_row(row![Message::SettingsDisplay, display]);
        table.add_row(row![Message::SettingsApplyOvertime, apply_overtime]);
        table.printstd();
    }
}
