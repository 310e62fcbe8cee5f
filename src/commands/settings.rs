//! Settings management command.
//!
//! Every edit goes through validation before anything is written, so a
//! rejected edit leaves the stored settings as they were.

use crate::libs::messages::Message;
use crate::libs::settings::{Settings, SettingsDraft};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    action: SettingsAction,
}

#[derive(Debug, Subcommand)]
enum SettingsAction {
    #[command(about = "Show the current settings")]
    Show,
    #[command(about = "Change individual settings", arg_required_else_help = true)]
    Set(SetArgs),
    #[command(about = "Edit all settings interactively")]
    Init,
    #[command(about = "Restore the default settings")]
    Reset {
        #[arg(short, long, help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long, help = "Office time in hours, breaks included")]
    office: Option<f64>,

    #[arg(long, help = "Work time in hours")]
    work: Option<f64>,

    #[arg(long, help = "Display mode: 0 full title, 1 compact title")]
    display: Option<i64>,

    #[arg(long, help = "Pull the target leave time by the accumulated overtime")]
    apply_overtime: Option<bool>,
}

impl SetArgs {
    /// Overlays the given options on a draft of the current settings.
    fn apply_to(&self, mut draft: SettingsDraft) -> SettingsDraft {
        if let Some(office) = self.office {
            draft.office_time_hours = office;
        }
        if let Some(work) = self.work {
            draft.work_time_hours = work;
        }
        if let Some(display) = self.display {
            draft.display = display;
        }
        if let Some(apply_overtime) = self.apply_overtime {
            draft.apply_overtime_to_target = apply_overtime;
        }
        draft
    }
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    match args.action {
        SettingsAction::Show => {
            msg_print!(Message::SettingsHeader, true);
            View::settings(&Settings::read()?);
        }
        SettingsAction::Set(set_args) => {
            store(set_args.apply_to(Settings::read()?.draft()))?;
        }
        SettingsAction::Init => {
            store(Settings::read()?.init()?)?;
        }
        SettingsAction::Reset { yes } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptConfirmReset.to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_print!(Message::SettingsUnchanged);
                return Ok(());
            }
            let settings = Settings::reset()?;
            msg_success!(Message::SettingsReset);
            View::settings(&settings);
        }
    }

    Ok(())
}

/// Validates `draft` and stores the resulting snapshot.
fn store(draft: SettingsDraft) -> Result<Settings> {
    let settings = match draft.validate() {
        Ok(settings) => settings,
        Err(e) => msg_bail_anyhow!(Message::SettingsRejected(e.to_string())),
    };
    settings
        .save()
        .map_err(|e| msg_error_anyhow!(Message::SettingsSaveFailed(format!("{:#}", e))))?;
    msg_success!(Message::SettingsSaved);
    View::settings(&settings);
    Ok(settings)
}
