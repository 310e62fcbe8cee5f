/// Every user-facing text of the application.
///
/// Variants carry the dynamic parts of a message; the wording itself lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SETTINGS MESSAGES ===
    SettingsSaved,
    SettingsReset,
    SettingsUnchanged,
    SettingsLoadFailed(String), // error
    SettingsSaveFailed(String), // error
    SettingsRejected(String),   // validation message
    SettingsHeader,
    SettingsOfficeTime,
    SettingsWorkTime,
    SettingsDisplay,
    SettingsApplyOvertime,

    // === DISPLAY MODES ===
    DisplayFullTitle,
    DisplayCompactTitle,

    // === TIMECARD MESSAGES ===
    TimecardReadFailed(String),         // source
    TimecardParseFailed(String),        // error
    TimecardNotCurrentMonth(String),    // year/month shown on the card
    TodayStartNotRecorded,
    TodayAlreadyFinished,

    // === EVALUATION MESSAGES ===
    EvaluationHeader(String), // year/month
    OvertimeLabel,
    TargetLeaveLabel,
    TitleFull { overtime: String, target: String },
    TitleCompact { overtime: String, target: String },
    DiagnosticHeader,
    AboutHeader,
    AboutText,
    EvaluationFailed(String), // error

    // === PROMPTS ===
    PromptOfficeTime,
    PromptWorkTime,
    PromptDisplayMode,
    PromptApplyOvertime,
    PromptConfirmReset,
}
