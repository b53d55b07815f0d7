//! Implementation of the `caff add` command.

use anyhow::Result;
use caff_core::Session;

use super::util::{apply_row_fields, row_mass_mg};
use crate::RowFields;

/// Appends an intake row and applies any explicit field values.
///
/// Without `--time` the row defaults to one hour after the previous row, the
/// same default the editing surface uses.
pub fn run(session: &mut Session, fields: &RowFields) -> Result<()> {
    let id = session.add_intake();
    apply_row_fields(session, id, fields)?;

    println!("Added intake {id} ({} mg)", row_mass_mg(session, id));
    Ok(())
}
