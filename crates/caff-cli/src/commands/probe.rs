//! Implementation of the `caff probe` command.

use anyhow::Result;
use caff_core::{Session, TimeBasis, absolute_coordinate, relative_coordinate};
use chrono::{NaiveDate, NaiveTime};

/// Shows the sample nearest to the queried point in time.
///
/// Queries outside the curve clamp to its boundary samples, the same way the
/// chart's pointer probing behaves.
pub fn run(
    session: &Session,
    time: NaiveTime,
    date: Option<NaiveDate>,
    day: Option<i64>,
) -> Result<()> {
    let series = session.compute_series();

    let coordinate = match session.basis() {
        TimeBasis::Absolute => {
            absolute_coordinate(date.unwrap_or_else(|| session.start_date()), time)
        }
        TimeBasis::Relative => relative_coordinate(day.unwrap_or(0), time),
    };

    match session.probe(&series, coordinate) {
        Some(text) => println!("{text}"),
        None => println!("No samples to probe; add an intake first."),
    }
    Ok(())
}
