//! # Kotime - KOT overtime calculator
//!
//! Computes the accumulated overtime of the month and today's target leave
//! time from the figures shown on a KING OF TIME timecard.
//!
//! ## Features
//!
//! - **Exact arithmetic**: minute-granular durations and wall clock times
//! - **KOT encodings**: decimal-hour codes (`1.30` = 1 h 30 min) both ways
//! - **Core time**: target leave times are never rewound before 15:00
//! - **Tolerant input**: missing or garbled timecard cells count as zero
//! - **Settings**: office/work hours and display preferences persisted as JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kotime::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
