//! Timeline sampling.
//!
//! Converts a set of resolved intakes into the fixed-step `(time, level)`
//! series that drives the chart. The series is finite, ascending in time, and
//! rebuilt from scratch on every call; there is no incremental update.

use crate::decay;

/// Spacing between consecutive samples, in hours (15 minutes).
///
/// This step balances curve smoothness against sample count and is part of
/// the output contract: consumers rely on it staying fixed.
pub const SAMPLE_STEP_HOURS: f64 = 0.25;

/// How far the series extends past the last intake, in hours.
///
/// Chosen so the curve visibly approaches baseline for typical half-lives.
pub const HORIZON_HOURS: f64 = 15.0;

/// An intake resolved onto the timeline axis, ready for sampling.
///
/// This trait lets the sampler work with different intake representations
/// (the session's resolved rows, or test fixtures).
pub trait SampledIntake {
    /// Timeline coordinate of the ingestion, in hours.
    fn coordinate_hours(&self) -> f64;

    /// Caffeine mass of the ingestion, in mg.
    fn mass_mg(&self) -> i64;
}

/// One point of the sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Sample {
    /// Timeline coordinate, in hours.
    pub time: f64,
    /// Estimated caffeine level, in mg. Never negative.
    pub level: f64,
}

/// Samples the summed decay curve over all intakes.
///
/// Intakes with non-positive mass are ignored. With no remaining intakes the
/// result is empty and no step generation runs; otherwise samples cover
/// `min(coordinate)` through `max(coordinate) + HORIZON_HOURS` at the fixed
/// step. The sample count is derived up front and positions are computed by
/// index, so float drift cannot skip or duplicate the final sample.
#[must_use]
pub fn sample_series<I: SampledIntake>(intakes: &[I], half_life_hours: f64) -> Vec<Sample> {
    let active: Vec<(f64, f64)> = intakes
        .iter()
        .filter(|i| i.mass_mg() > 0)
        .map(|i| {
            #[expect(clippy::cast_precision_loss, reason = "mg values are small integers")]
            let mass = i.mass_mg() as f64;
            (i.coordinate_hours(), mass)
        })
        .collect();

    let Some(start) = active.iter().map(|(t, _)| *t).reduce(f64::min) else {
        return Vec::new();
    };
    let last = active.iter().map(|(t, _)| *t).fold(start, f64::max);
    let end = last + HORIZON_HOURS;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "span is non-negative and bounded by the intake range"
    )]
    let count = ((end - start) / SAMPLE_STEP_HOURS).floor() as usize + 1;

    (0..count)
        .map(|i| {
            #[expect(clippy::cast_precision_loss, reason = "sample indexes are small")]
            let time = (i as f64).mul_add(SAMPLE_STEP_HOURS, start);
            let level = active
                .iter()
                .map(|(coord, mass)| decay::level(*mass, half_life_hours, time - coord))
                .sum();
            Sample { time, level }
        })
        .collect()
}
