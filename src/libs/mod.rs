//! Core library modules for the kotime application.
//!
//! ## Layout
//!
//! - **Value types**: [`duration`] and [`clock`]
//! - **Calculation**: [`overtime`], the engine turning attendance readings
//!   into overtime and a target leave time
//! - **Inputs**: [`timecard`] snapshot reader and [`settings`] store
//! - **Output**: [`render`] strings, [`view`] tables and [`messages`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kotime::libs::{overtime, settings::Settings, timecard::Timecard};
//!
//! let settings = Settings::load();
//! let timecard = Timecard::from_json(&std::fs::read_to_string("timecard.json")?)?;
//! let today = chrono::Local::now().date_naive();
//! let evaluation = overtime::evaluate(&timecard.attendance(&settings, today), &settings)?;
//! println!("{}", evaluation.breakdown());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clock;
pub mod data_storage;
pub mod duration;
pub mod messages;
pub mod overtime;
pub mod render;
pub mod settings;
pub mod timecard;
pub mod view;
