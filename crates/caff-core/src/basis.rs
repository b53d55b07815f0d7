//! Conversion between calendar timestamps and the linear timeline axis.
//!
//! The two historical timestamp disciplines share the decay math and the
//! sampler; only coordinate resolution and label formatting differ, so they
//! are modeled as one tagged enum rather than duplicated code paths.
//!
//! Coordinates are hours on a single linear axis:
//! - absolute basis: hours since the Unix epoch of the naive date+time;
//! - relative basis: `day_offset * 24 + hours + minutes / 60`, where the day
//!   offset is inferred from row order (see [`crate::sequencer`]).

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Seconds per hour, as a float for coordinate math.
const SECS_PER_HOUR: f64 = 3600.0;

/// The scheme mapping an intake's stored time fields onto one comparable
/// numeric coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    /// Every row carries a full calendar date; coordinates are epoch-based.
    #[default]
    Absolute,
    /// Rows carry bare clock times; days are inferred from rollovers.
    Relative,
}

impl TimeBasis {
    /// Formats a timeline coordinate as a human label.
    ///
    /// Absolute coordinates render as `"M/D hAM|PM"`, relative ones as
    /// `"hAM|PM"`. Minutes are dropped, matching the chart axis.
    #[must_use]
    pub fn format_coordinate(self, hours: f64) -> String {
        match self {
            Self::Absolute => {
                let datetime = coordinate_to_datetime(hours);
                let (display_hour, period) = twelve_hour(datetime.time().hour());
                format!(
                    "{}/{} {display_hour}{period}",
                    datetime.month(),
                    datetime.day()
                )
            }
            Self::Relative => {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "rem_euclid(24) then floor is always in 0..24"
                )]
                let hour_of_day = hours.rem_euclid(24.0).floor() as u32;
                let (display_hour, period) = twelve_hour(hour_of_day);
                format!("{display_hour}{period}")
            }
        }
    }
}

/// Resolves a full calendar timestamp to its absolute coordinate in hours.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "epoch seconds for calendar dates fit f64 exactly"
)]
pub fn absolute_coordinate(date: NaiveDate, time: NaiveTime) -> f64 {
    date.and_time(time).and_utc().timestamp() as f64 / SECS_PER_HOUR
}

/// Resolves a bare clock time plus an inferred day offset to its relative
/// coordinate in hours.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "day offsets and minutes are tiny integers"
)]
pub fn relative_coordinate(day_offset: i64, time: NaiveTime) -> f64 {
    day_offset as f64 * 24.0 + f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Maps an absolute coordinate back to its calendar timestamp.
#[expect(
    clippy::cast_possible_truncation,
    reason = "coordinates round-trip through i64 epoch seconds"
)]
fn coordinate_to_datetime(hours: f64) -> chrono::NaiveDateTime {
    let secs = (hours * SECS_PER_HOUR).round() as i64;
    DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .naive_utc()
}

/// 12-hour clock conversion with the midnight/noon special cases.
const fn twelve_hour(hour: u32) -> (u32, &'static str) {
    match hour {
        0 => (12, "AM"),
        h if h < 12 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    }
}
