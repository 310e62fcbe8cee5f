//! Text rendering of an evaluation for the page title and the widget.

use super::clock::Clock;
use super::messages::Message;
use super::overtime::Evaluation;
use super::settings::DisplayMode;

/// How the widget shows a target leave time that is not known yet.
pub const WIDGET_UNKNOWN_CLOCK: &str = " - - : - - ";

/// Page title for the configured display mode.
pub fn title(evaluation: &Evaluation, display: DisplayMode) -> String {
    let overtime = evaluation.overtime.to_signed_clock_string();
    let target = evaluation.target_leave.to_display_string();
    let message = match display {
        DisplayMode::FullTitle => Message::TitleFull { overtime, target },
        DisplayMode::CompactTitle => Message::TitleCompact { overtime, target },
    };
    message.to_string()
}

/// Widget value for the target leave time; the unknown clock is spaced out.
pub fn widget_clock(clock: &Clock) -> String {
    match clock {
        Clock::Known { .. } => clock.to_display_string(),
        Clock::Unknown => WIDGET_UNKNOWN_CLOCK.to_string(),
    }
}
