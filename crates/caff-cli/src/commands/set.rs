//! Implementation of the `caff set` subcommands.

use anyhow::Result;
use caff_core::{HalfLifeSelection, Session};
use chrono::NaiveDate;

/// Sets the metabolism half-life.
pub fn half_life(
    session: &mut Session,
    selection: HalfLifeSelection,
    hours: Option<f64>,
) -> Result<()> {
    session.set_half_life(selection, hours);

    println!("Half-life set to {} h", session.resolved_half_life());
    Ok(())
}

/// Moves the anchor start date, preserving offsets between intakes.
pub fn start_date(session: &mut Session, date: NaiveDate) -> Result<()> {
    session.set_start_date(date);

    println!("Start date set to {date}");
    Ok(())
}
