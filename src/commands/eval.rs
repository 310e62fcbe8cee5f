//! Overtime evaluation command.
//!
//! Reads a timecard snapshot, evaluates it with the stored settings and
//! prints the page title, the widget values and, on request, the about text
//! and the diagnostic breakdown.

use crate::libs::messages::Message;
use crate::libs::overtime::{self, Evaluation};
use crate::libs::render;
use crate::libs::settings::Settings;
use crate::libs::timecard::Timecard;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs;
use std::io::{self, Read};

/// Command-line arguments for the eval command.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Timecard snapshot in JSON; `-` reads it from standard input
    #[arg(required = true)]
    timecard: String,

    #[arg(long, short, default_value = "today", help = "Evaluate as of this date (YYYY-MM-DD or 'today')")]
    date: String,

    #[arg(long, short, help = "Show the about text and the diagnostic breakdown")]
    info: bool,

    #[arg(long, help = "Print the evaluation as JSON")]
    json: bool,
}

/// Executes the eval command.
///
/// The settings snapshot is read once up front; unreadable settings fall back
/// to the defaults with a warning so the figures are always produced.
pub fn cmd(args: EvalArgs) -> Result<()> {
    let today = parse_date(&args.date)?;
    let settings = Settings::load();
    let timecard = read_timecard(&args.timecard)?;

    let evaluation = evaluate(&timecard, &settings, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    explain_missing_target(&timecard, today);

    msg_print!(Message::EvaluationHeader(timecard.year_month.clone()), true);
    msg_print!(render::title(&evaluation, settings.display));
    View::evaluation(&evaluation);

    if args.info {
        msg_print!(Message::AboutHeader, true);
        msg_print!(Message::AboutText);
        msg_print!(Message::DiagnosticHeader, true);
        msg_print!(evaluation.breakdown());
    }

    Ok(())
}

/// Evaluates `timecard` as of `today`.
pub fn evaluate(timecard: &Timecard, settings: &Settings, today: NaiveDate) -> Result<Evaluation> {
    let attendance = timecard.attendance(settings, today);
    overtime::evaluate(&attendance, settings).map_err(|e| anyhow::anyhow!(Message::EvaluationFailed(e.to_string())))
}

/// Loads a snapshot from a file, or from standard input for `-`.
pub fn read_timecard(source: &str) -> Result<Timecard> {
    let json = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).with_context(|| Message::TimecardReadFailed("stdin".to_string()))?;
        buffer
    } else {
        fs::read_to_string(source).with_context(|| Message::TimecardReadFailed(source.to_string()))?
    };

    Timecard::from_json(&json).map_err(|e| anyhow::anyhow!(Message::TimecardParseFailed(e.to_string())))
}

fn explain_missing_target(timecard: &Timecard, today: NaiveDate) {
    if !timecard.is_current_month(today) {
        msg_info!(Message::TimecardNotCurrentMonth(timecard.year_month.clone()));
    } else if timecard.start_clock(today).is_none() {
        msg_info!(Message::TodayStartNotRecorded);
    } else if timecard.end_clock(today).is_some() {
        msg_info!(Message::TodayAlreadyFinished);
    }
}

/// Parses `today` or a `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
