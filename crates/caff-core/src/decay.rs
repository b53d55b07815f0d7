//! First-order elimination math.

/// Remaining caffeine from a single intake after `elapsed_hours`.
///
/// Single-compartment first-order elimination:
/// `mass * exp(-ln(2) / half_life * elapsed)`.
///
/// An intake that has not yet occurred at the query time contributes exactly
/// zero: no negative decay, no error. `half_life_hours` must be strictly
/// positive; half-life resolution guarantees that before a value reaches
/// here (see [`crate::types::HalfLifeSelection::resolve`]).
#[must_use]
pub fn level(mass_mg: f64, half_life_hours: f64, elapsed_hours: f64) -> f64 {
    if elapsed_hours < 0.0 {
        return 0.0;
    }
    mass_mg * (-(std::f64::consts::LN_2 / half_life_hours) * elapsed_hours).exp()
}
