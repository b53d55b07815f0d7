//! Implementation of the `caff remove` command.

use anyhow::Result;
use caff_core::{IntakeId, Session};

/// Removes a row.
pub fn run(session: &mut Session, id: u64) -> Result<()> {
    session.remove(IntakeId::new(id))?;

    println!("Removed intake {id}");
    Ok(())
}
