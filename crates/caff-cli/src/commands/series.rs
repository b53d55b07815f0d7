//! Implementation of the `caff series` command.
//!
//! Prints the sampled curve either as labeled lines or as JSON for external
//! consumers (chart drawing itself lives outside this tool).

use anyhow::{Context, Result};
use caff_core::Session;
use serde::Serialize;

/// JSON payload for `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesOutput {
    half_life_hours: f64,
    samples: Vec<LabeledSample>,
}

/// One sample with its human label attached.
#[derive(Debug, Serialize)]
struct LabeledSample {
    time: f64,
    level: f64,
    label: String,
}

/// Recomputes and prints the series.
pub fn run(session: &Session, json: bool) -> Result<()> {
    let series = session.compute_series();

    if json {
        let output = SeriesOutput {
            half_life_hours: session.resolved_half_life(),
            samples: series
                .iter()
                .map(|s| LabeledSample {
                    time: s.time,
                    level: s.level,
                    label: session.format_coordinate(s.time),
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string(&output).context("failed to serialize series")?
        );
        return Ok(());
    }

    if series.is_empty() {
        println!("No intakes to chart; add one with `caff add`.");
        return Ok(());
    }

    for sample in &series {
        println!(
            "{:<10} {:8.1} mg",
            session.format_coordinate(sample.time),
            sample.level
        );
    }
    Ok(())
}
