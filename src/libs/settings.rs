//! User settings: office/work hour targets and display preferences.
//!
//! Settings are a flat key/value record persisted as JSON in the platform
//! application data directory. The record keeps the historical keys of the
//! browser script it replaces, so an exported settings object can be dropped
//! in unchanged:
//!
//! ```json
//! { "OFFICETIME": 9, "WORKTIME": 8, "DISPLAY": 1, "CALCOVERTIMEFLAG": 0 }
//! ```
//!
//! ## Snapshots
//!
//! A [`Settings`] value is an immutable snapshot. It is loaded once when a
//! command starts and passed explicitly into the overtime engine. Editing goes
//! through a [`SettingsDraft`], which is validated into a *new* snapshot; the
//! stored record is only replaced once validation has passed, so a rejected
//! edit leaves the previous settings in effect.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kotime::libs::settings::Settings;
//!
//! let settings = Settings::load();
//! let mut draft = settings.draft();
//! draft.work_time_hours = 7.5;
//! let updated = draft.validate()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fs::{self, File};
use std::path::Path;
use thiserror::Error;

/// Settings file name inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_OFFICE_TIME_HOURS: f64 = 9.0;
pub const DEFAULT_WORK_TIME_HOURS: f64 = 8.0;

/// How the evaluation is summarised in the page title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// `Overtime: 2:30 Target leave: 18:30`
    FullTitle,
    /// `2:30 / 18:30 (overtime/target leave)`
    #[default]
    CompactTitle,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::FullTitle, DisplayMode::CompactTitle];

    /// Maps the stored code; anything but `0` or `1` falls back to compact.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => DisplayMode::FullTitle,
            _ => DisplayMode::CompactTitle,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            DisplayMode::FullTitle => 0,
            DisplayMode::CompactTitle => 1,
        }
    }

    pub fn label(&self) -> Message {
        match self {
            DisplayMode::FullTitle => Message::DisplayFullTitle,
            DisplayMode::CompactTitle => Message::DisplayCompactTitle,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for DisplayMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for DisplayMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let code = match value.as_f64() {
            Some(number) if number == 0.0 => 0,
            _ => 1,
        };
        Ok(DisplayMode::from_code(code))
    }
}

/// Rejections raised at the settings-edit boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("hours must be greater than 0 (office time {office}, work time {work})")]
    NonPositiveHours { office: f64, work: f64 },
    #[error("office time ({office}) must be at least the work time ({work})")]
    OfficeShorterThanWork { office: f64, work: f64 },
}

/// Immutable settings snapshot consumed by the overtime engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hours spent at the office per day, breaks included.
    #[serde(rename = "OFFICETIME")]
    pub office_time_hours: f64,

    /// Hours of required work per day.
    #[serde(rename = "WORKTIME")]
    pub work_time_hours: f64,

    #[serde(rename = "DISPLAY")]
    pub display: DisplayMode,

    /// Pull today's target leave time by the accumulated overtime.
    #[serde(rename = "CALCOVERTIMEFLAG", serialize_with = "serialize_flag", deserialize_with = "deserialize_flag")]
    pub apply_overtime_to_target: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            office_time_hours: DEFAULT_OFFICE_TIME_HOURS,
            work_time_hours: DEFAULT_WORK_TIME_HOURS,
            display: DisplayMode::CompactTitle,
            apply_overtime_to_target: false,
        }
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

// Accepts 0/1 as stored by the script as well as plain JSON booleans.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

/// Editable, unvalidated form of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsDraft {
    pub office_time_hours: f64,
    pub work_time_hours: f64,
    /// Raw display code as entered; coerced to compact unless `0` or `1`.
    pub display: i64,
    pub apply_overtime_to_target: bool,
}

impl SettingsDraft {
    /// Checks `office >= work > 0` and turns the draft into a snapshot.
    ///
    /// # Errors
    ///
    /// [`SettingsError::NonPositiveHours`] when either hour field is not a
    /// positive finite number, [`SettingsError::OfficeShorterThanWork`] when
    /// the office time is below the work time.
    pub fn validate(self) -> Result<Settings, SettingsError> {
        let office = self.office_time_hours;
        let work = self.work_time_hours;

        let positive = |hours: f64| hours.is_finite() && hours > 0.0;
        if !positive(office) || !positive(work) {
            return Err(SettingsError::NonPositiveHours { office, work });
        }
        if office < work {
            return Err(SettingsError::OfficeShorterThanWork { office, work });
        }

        Ok(Settings {
            office_time_hours: office,
            work_time_hours: work,
            display: DisplayMode::from_code(self.display),
            apply_overtime_to_target: self.apply_overtime_to_target,
        })
    }
}

impl Settings {
    /// Starts an edit from the current snapshot.
    pub fn draft(&self) -> SettingsDraft {
        SettingsDraft {
            office_time_hours: self.office_time_hours,
            work_time_hours: self.work_time_hours,
            display: i64::from(self.display.code()),
            apply_overtime_to_target: self.apply_overtime_to_target,
        }
    }

    /// Reads the stored settings, returning defaults when nothing is stored yet.
    ///
    /// Keys missing from the stored record take their default values.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Settings> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        Self::read_from(&path)
    }

    pub fn read_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let settings_str = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let settings: Settings =
            serde_json::from_str(&settings_str).with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(?settings, path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Like [`Settings::read`], but never fails: unreadable settings are
    /// reported as a warning and the defaults are used instead.
    pub fn load() -> Settings {
        match Self::read() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default settings");
                msg_warning!(Message::SettingsLoadFailed(format!("{:#}", e)));
                Settings::default()
            }
        }
    }

    /// Writes this snapshot as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&file, self)?;
        tracing::info!(settings = ?self, path = %path.display(), "saved settings");
        Ok(())
    }

    /// Stores the default settings and returns them as the new snapshot.
    pub fn reset() -> Result<Settings> {
        let settings = Settings::default();
        settings.save()?;
        Ok(settings)
    }

    /// Runs an interactive editor pre-filled with this snapshot.
    ///
    /// The returned draft is not validated; the caller decides whether to
    /// store it.
    pub fn init(&self) -> Result<SettingsDraft> {
        let theme = ColorfulTheme::default();

        let office_time_hours: f64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptOfficeTime.to_string())
            .default(self.office_time_hours)
            .interact_text()?;

        let work_time_hours: f64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkTime.to_string())
            .default(self.work_time_hours)
            .interact_text()?;

        let labels: Vec<String> = DisplayMode::ALL.iter().map(|mode| mode.to_string()).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDisplayMode.to_string())
            .items(&labels)
            .default(usize::from(self.display.code()))
            .interact()?;

        let apply_overtime_to_target = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptApplyOvertime.to_string())
            .default(self.apply_overtime_to_target)
            .interact()?;

        Ok(SettingsDraft {
            office_time_hours,
            work_time_hours,
            display: i64::from(DisplayMode::ALL[selected].code()),
            apply_overtime_to_target,
        })
    }
}
