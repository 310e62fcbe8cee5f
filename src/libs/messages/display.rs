//! Display implementation for application messages.
//!
//! All message wording is kept in one `match` so that the rest of the code
//! only ever refers to [`Message`] variants. Variants with parameters
//! interpolate them here and nowhere else.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === SETTINGS MESSAGES ===
            Message::SettingsSaved => "Settings saved. They apply from the next evaluation.".to_string(),
            Message::SettingsReset => "Settings reset to defaults".to_string(),
            Message::SettingsUnchanged => "Settings left unchanged".to_string(),
            Message::SettingsLoadFailed(error) => format!("Failed to load settings, using defaults: {}", error),
            Message::SettingsSaveFailed(error) => format!("Failed to save settings: {}", error),
            Message::SettingsRejected(reason) => format!("Settings rejected: {}", reason),
            Message::SettingsHeader => "Settings".to_string(),
            Message::SettingsOfficeTime => "Office time (h, breaks included)".to_string(),
            Message::SettingsWorkTime => "Work time (h)".to_string(),
            Message::SettingsDisplay => "Display".to_string(),
            Message::SettingsApplyOvertime => "Apply overtime to target leave time".to_string(),

            // === DISPLAY MODES ===
            Message::DisplayFullTitle => "Full title + widget".to_string(),
            Message::DisplayCompactTitle => "Compact title + widget".to_string(),

            // === TIMECARD MESSAGES ===
            Message::TimecardReadFailed(source) => format!("Failed to read timecard snapshot from {}", source),
            Message::TimecardParseFailed(error) => format!("Timecard snapshot is not valid JSON: {}", error),
            Message::TimecardNotCurrentMonth(year_month) => {
                format!("Timecard shows {}, not the current month; target leave time is not computed", year_month)
            }
            Message::TodayStartNotRecorded => "Today's start time is not recorded yet".to_string(),
            Message::TodayAlreadyFinished => "Today's end time is already recorded".to_string(),

            // === EVALUATION MESSAGES ===
            Message::EvaluationHeader(year_month) => format!("Overtime for {}", year_month),
            Message::OvertimeLabel => "Overtime total".to_string(),
            Message::TargetLeaveLabel => "Target leave time".to_string(),
            Message::TitleFull { overtime, target } => format!("Overtime: {} Target leave: {}", overtime, target),
            Message::TitleCompact { overtime, target } => format!("{} / {} (overtime/target leave)", overtime, target),
            Message::DiagnosticHeader => "Diagnostics".to_string(),
            Message::AboutHeader => "About".to_string(),
            Message::AboutText => "The overtime shown by KOT only adds up the time worked beyond 8 hours on each day, \
                 so days you left early are not deducted. This tool compares the time you actually worked \
                 with the time you were required to work and shows the difference.\n\
                 Unofficial tool: changes to the KOT timecard page may break the extraction."
                .to_string(),
            Message::EvaluationFailed(error) => format!("Failed to evaluate overtime: {}", error),

            // === PROMPTS ===
            Message::PromptOfficeTime => "Office time in hours, breaks included".to_string(),
            Message::PromptWorkTime => "Work time in hours".to_string(),
            Message::PromptDisplayMode => "Display mode".to_string(),
            Message::PromptApplyOvertime => "Pull the target leave time by the accumulated overtime?".to_string(),
            Message::PromptConfirmReset => "Reset settings to their default values?".to_string(),
        };

        write!(f, "{}", text)
    }
}
