//! Intake rows and their derived caffeine mass.

use chrono::{NaiveDate, NaiveTime};

use crate::presets::{ConcentrationSelection, VolumeSelection};
use crate::types::IntakeId;

/// One recorded ingestion event: a drink, an amount, and a point in time.
///
/// A row may be partially filled while the user edits it. Rows with no usable
/// timestamp or a non-positive derived mass stay visible on the editing
/// surface but are excluded from the decay computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Intake {
    /// Row identifier, stable for the lifetime of the session.
    pub id: IntakeId,
    /// Calendar date. Unset for relative-basis rows and freshly added rows.
    pub date: Option<NaiveDate>,
    /// Clock time of ingestion.
    pub time: Option<NaiveTime>,
    /// Drink selection.
    pub concentration: ConcentrationSelection,
    /// Custom mg per 100 ml, used when the drink selection is custom.
    pub custom_concentration: Option<f64>,
    /// Serving selection.
    pub volume: VolumeSelection,
    /// Custom ml, used when the serving selection is custom.
    pub custom_volume: Option<f64>,
}

impl Intake {
    /// Creates a row with the default drink and serving.
    #[must_use]
    pub fn new(id: IntakeId, time: Option<NaiveTime>) -> Self {
        Self {
            id,
            date: None,
            time,
            concentration: ConcentrationSelection::default(),
            custom_concentration: None,
            volume: VolumeSelection::default(),
            custom_volume: None,
        }
    }

    /// Resolved concentration in mg per 100 ml.
    ///
    /// An unset or unusable custom value resolves to 0, never an error.
    #[must_use]
    pub fn mg_per_100ml(&self) -> f64 {
        self.concentration.mg_per_100ml().unwrap_or_else(|| {
            self.custom_concentration
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0)
        })
    }

    /// Resolved serving volume in ml.
    #[must_use]
    pub fn volume_ml(&self) -> f64 {
        self.volume.ml().unwrap_or_else(|| {
            self.custom_volume
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0)
        })
    }

    /// Caffeine mass for this row: `round(mg/100ml / 100 × ml)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "mass is rounded and far below i64 range"
    )]
    pub fn mass_mg(&self) -> i64 {
        (self.mg_per_100ml() / 100.0 * self.volume_ml()).round() as i64
    }
}
