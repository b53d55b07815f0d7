//! Implementation of the `caff clear` command.

use anyhow::Result;
use caff_core::Session;

/// Resets the session to a single default row.
pub fn run(session: &mut Session) -> Result<()> {
    session.clear();

    println!("Cleared all intakes");
    Ok(())
}
