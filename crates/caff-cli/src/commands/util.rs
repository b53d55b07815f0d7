//! Shared helpers for row-editing commands.

use anyhow::Result;
use caff_core::{ConcentrationSelection, IntakeId, Session, VolumeSelection};

use crate::RowFields;

/// Applies the optional row fields to an existing intake.
///
/// A bare custom value (`--mg-per-100ml`, `--ml`) implies the matching custom
/// selection, so users don't have to spell `--drink custom` out.
pub fn apply_row_fields(session: &mut Session, id: IntakeId, fields: &RowFields) -> Result<()> {
    if let Some(time) = fields.time {
        session.set_time(id, Some(time))?;
    }
    if let Some(date) = fields.date {
        session.set_date(id, Some(date))?;
    }

    let drink = fields
        .drink
        .or_else(|| fields.mg_per_100ml.map(|_| ConcentrationSelection::Custom));
    if let Some(selection) = drink {
        session.set_concentration(id, selection, fields.mg_per_100ml)?;
    }

    let amount = fields
        .amount
        .or_else(|| fields.ml.map(|_| VolumeSelection::Custom));
    if let Some(selection) = amount {
        session.set_volume(id, selection, fields.ml)?;
    }

    Ok(())
}

/// Looks up a row's derived mass for confirmation output.
pub fn row_mass_mg(session: &Session, id: IntakeId) -> i64 {
    session
        .intakes()
        .iter()
        .find(|intake| intake.id == id)
        .map_or(0, caff_core::Intake::mass_mg)
}
