//! Implementation of the `caff edit` command.

use anyhow::Result;
use caff_core::{IntakeId, Session};

use super::util::{apply_row_fields, row_mass_mg};
use crate::RowFields;

/// Applies field edits to an existing row.
pub fn run(session: &mut Session, id: u64, fields: &RowFields) -> Result<()> {
    let id = IntakeId::new(id);
    if !session.intakes().iter().any(|intake| intake.id == id) {
        anyhow::bail!("no intake with id {id}");
    }
    apply_row_fields(session, id, fields)?;

    println!("Updated intake {id} ({} mg)", row_mass_mg(session, id));
    Ok(())
}
