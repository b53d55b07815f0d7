//! Command-line argument definitions.

use std::path::PathBuf;

use caff_core::{ConcentrationSelection, HalfLifeSelection, VolumeSelection};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

/// Caffeine timeline calculator.
///
/// Tracks caffeine intakes and models how the total amount in the body
/// accumulates and decays over time.
#[derive(Debug, Parser)]
#[command(name = "caff", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add an intake row.
    Add {
        #[command(flatten)]
        fields: RowFields,
    },

    /// Duplicate an intake row, one hour later on the clock.
    Duplicate {
        /// Row id, as shown by `caff status`.
        id: u64,
    },

    /// Remove an intake row.
    Remove {
        /// Row id, as shown by `caff status`.
        id: u64,
    },

    /// Edit fields of an intake row.
    Edit {
        /// Row id, as shown by `caff status`.
        id: u64,

        #[command(flatten)]
        fields: RowFields,
    },

    /// Change a global setting.
    Set {
        #[command(subcommand)]
        setting: SetCommand,
    },

    /// Show the current rows and settings.
    Status,

    /// Print the sampled caffeine curve.
    Series {
        /// Output as JSON instead of labeled lines.
        #[arg(long)]
        json: bool,
    },

    /// Show the level nearest to a point in time.
    Probe {
        /// Clock time to query (HH:MM).
        #[arg(value_parser = parse_clock_time)]
        time: NaiveTime,

        /// Calendar date for the query (absolute basis). Defaults to the
        /// start date.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Day offset from the start (relative basis). Defaults to 0.
        #[arg(long)]
        day: Option<i64>,
    },

    /// Reset to a single default row.
    Clear,
}

/// Intake row fields shared by `add` and `edit`.
#[derive(Debug, Args)]
pub struct RowFields {
    /// Clock time of the intake (HH:MM).
    #[arg(long, value_parser = parse_clock_time)]
    pub time: Option<NaiveTime>,

    /// Calendar date of the intake. Overrides the sequenced date.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Drink preset, by name or mg/100ml value (e.g. "espresso" or "212").
    #[arg(long)]
    pub drink: Option<ConcentrationSelection>,

    /// Custom concentration in mg per 100 ml (implies a custom drink).
    #[arg(long)]
    pub mg_per_100ml: Option<f64>,

    /// Serving preset, by name or ml value (e.g. "can" or "330").
    #[arg(long)]
    pub amount: Option<VolumeSelection>,

    /// Custom serving size in ml (implies a custom amount).
    #[arg(long)]
    pub ml: Option<f64>,
}

/// Global settings.
#[derive(Debug, Subcommand)]
pub enum SetCommand {
    /// Metabolism half-life.
    HalfLife {
        /// Selection: fast (3h), typical (5h), slow (7h), or custom.
        selection: HalfLifeSelection,

        /// Hours for the custom selection.
        #[arg(long)]
        hours: Option<f64>,
    },

    /// Anchor start date. Offsets between existing intakes are preserved.
    StartDate {
        /// The new start date (YYYY-MM-DD).
        date: NaiveDate,
    },
}

/// Parses an `HH:MM` clock time (seconds tolerated).
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("invalid clock time {s:?}: {e}"))
}
