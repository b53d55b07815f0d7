//! Implementation of the `caff status` command.

use anyhow::Result;
use caff_core::{Intake, Session, TimeBasis, sequencer};

/// Prints the global settings and every intake row with its derived mass.
///
/// Rows excluded from the curve (no usable timestamp, zero mass) still print,
/// showing 0 mg.
pub fn run(session: &Session) -> Result<()> {
    println!("Start date: {}", session.start_date());
    println!(
        "Half-life:  {} h ({})",
        session.resolved_half_life(),
        session.half_life()
    );
    println!("Basis:      {:?}", session.basis());
    println!();

    let day_offsets = (session.basis() == TimeBasis::Relative).then(|| {
        let times: Vec<_> = session.intakes().iter().map(|i| i.time).collect();
        sequencer::infer_day_offsets(&times)
    });

    for (index, intake) in session.intakes().iter().enumerate() {
        let when = day_offsets
            .as_ref()
            .map_or_else(|| absolute_when(intake), |offsets| relative_when(intake, offsets[index]));
        println!(
            "[{}] {when}  {}  {} mg",
            intake.id,
            drink_and_amount(intake),
            intake.mass_mg()
        );
    }

    let total: i64 = session.resolve_intakes().iter().map(|r| r.mass_mg).sum();
    println!();
    println!("Total on the curve: {total} mg");
    Ok(())
}

fn absolute_when(intake: &Intake) -> String {
    let date = intake
        .date
        .map_or_else(|| "----------".to_string(), |d| d.to_string());
    format!("{date} {}", clock(intake))
}

fn relative_when(intake: &Intake, day_offset: i64) -> String {
    format!("day {day_offset} {}", clock(intake))
}

fn clock(intake: &Intake) -> String {
    intake
        .time
        .map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

fn drink_and_amount(intake: &Intake) -> String {
    format!(
        "{} ({} mg/100ml), {} ({} ml)",
        intake.concentration.label(),
        intake.mg_per_100ml(),
        intake.volume.label(),
        intake.volume_ml()
    )
}
