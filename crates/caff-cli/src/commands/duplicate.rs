//! Implementation of the `caff duplicate` command.

use anyhow::Result;
use caff_core::{IntakeId, Session};

use super::util::row_mass_mg;

/// Duplicates a row directly after its source, one hour later.
pub fn run(session: &mut Session, id: u64) -> Result<()> {
    let copy_id = session.duplicate(IntakeId::new(id))?;

    println!("Duplicated intake {id} as {copy_id} ({} mg)", row_mass_mg(session, copy_id));
    Ok(())
}
