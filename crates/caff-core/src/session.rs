//! Session state and recomputation.
//!
//! One explicit structure owns everything the editing surface mutates: the
//! ordered intake rows, the time basis, the anchor start date, the half-life
//! selection, and the row counter. Recomputation is an explicit call:
//! [`Session::compute_series`] is a pure function of this state and returns a
//! fresh series every time; nothing is threaded through shared globals.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::basis::{self, TimeBasis};
use crate::intake::Intake;
use crate::lookup::nearest_sample;
use crate::presets::{ConcentrationSelection, VolumeSelection};
use crate::sampler::{Sample, SampledIntake, sample_series};
use crate::sequencer;
use crate::types::{HalfLifeSelection, IntakeId};

/// Clock time given to the first row of a fresh session.
fn default_first_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

/// Errors from session mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The referenced intake row does not exist.
    #[error("no intake with id {0}")]
    UnknownIntake(IntakeId),
}

/// An intake resolved onto the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedIntake {
    /// The row this resolution came from.
    pub id: IntakeId,
    /// Timeline coordinate in hours.
    pub coordinate_hours: f64,
    /// Derived caffeine mass in mg.
    pub mass_mg: i64,
}

impl SampledIntake for ResolvedIntake {
    fn coordinate_hours(&self) -> f64 {
        self.coordinate_hours
    }

    fn mass_mg(&self) -> i64 {
        self.mass_mg
    }
}

/// The editing session: intake rows plus the global controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    basis: TimeBasis,
    start_date: NaiveDate,
    half_life: HalfLifeSelection,
    custom_half_life: Option<f64>,
    intakes: Vec<Intake>,
    next_id: u64,
}

impl Session {
    /// Creates a session with a single default row at 08:00.
    #[must_use]
    pub fn new(basis: TimeBasis, start_date: NaiveDate) -> Self {
        let mut session = Self {
            basis,
            start_date,
            half_life: HalfLifeSelection::default(),
            custom_half_life: None,
            intakes: Vec::new(),
            next_id: 0,
        };
        session.reset_rows();
        session
    }

    /// The active time basis.
    #[must_use]
    pub const fn basis(&self) -> TimeBasis {
        self.basis
    }

    /// The anchor start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The half-life selection.
    #[must_use]
    pub const fn half_life(&self) -> HalfLifeSelection {
        self.half_life
    }

    /// The custom half-life backing field, if any.
    #[must_use]
    pub const fn custom_half_life(&self) -> Option<f64> {
        self.custom_half_life
    }

    /// The intake rows, in row order.
    #[must_use]
    pub fn intakes(&self) -> &[Intake] {
        &self.intakes
    }

    /// Half-life in hours, with the custom fallback applied.
    #[must_use]
    pub fn resolved_half_life(&self) -> f64 {
        self.half_life.resolve(self.custom_half_life)
    }

    // ========== Mutations ==========

    /// Appends a row one hour after the previous row's clock time (wrapping
    /// at midnight), then re-sequences dates.
    pub fn add_intake(&mut self) -> IntakeId {
        let time = self
            .intakes
            .last()
            .and_then(|last| last.time)
            .map_or_else(default_first_time, plus_one_hour);

        let id = self.take_id();
        self.intakes.push(Intake::new(id, Some(time)));
        self.resequence();
        id
    }

    /// Inserts a copy of `id` directly after it, with the clock time advanced
    /// one hour.
    pub fn duplicate(&mut self, id: IntakeId) -> Result<IntakeId, SessionError> {
        let index = self.index_of(id)?;

        let mut copy = self.intakes[index].clone();
        copy.id = self.take_id();
        copy.date = None;
        copy.time = copy.time.map(plus_one_hour);

        let copy_id = copy.id;
        self.intakes.insert(index + 1, copy);
        self.resequence();
        Ok(copy_id)
    }

    /// Removes the row with `id`.
    pub fn remove(&mut self, id: IntakeId) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        self.intakes.remove(index);
        Ok(())
    }

    /// Sets a row's clock time and re-sequences dates.
    pub fn set_time(&mut self, id: IntakeId, time: Option<NaiveTime>) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        self.intakes[index].time = time;
        self.resequence();
        Ok(())
    }

    /// Sets a row's calendar date directly.
    pub fn set_date(&mut self, id: IntakeId, date: Option<NaiveDate>) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        self.intakes[index].date = date;
        Ok(())
    }

    /// Sets a row's drink selection and custom concentration field.
    pub fn set_concentration(
        &mut self,
        id: IntakeId,
        selection: ConcentrationSelection,
        custom_mg_per_100ml: Option<f64>,
    ) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        self.intakes[index].concentration = selection;
        self.intakes[index].custom_concentration = custom_mg_per_100ml;
        Ok(())
    }

    /// Sets a row's serving selection and custom volume field.
    pub fn set_volume(
        &mut self,
        id: IntakeId,
        selection: VolumeSelection,
        custom_ml: Option<f64>,
    ) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        self.intakes[index].volume = selection;
        self.intakes[index].custom_volume = custom_ml;
        Ok(())
    }

    /// Moves the anchor start date.
    ///
    /// Under the absolute basis this re-anchors every row, preserving the
    /// pairwise offsets between intakes. Under the relative basis the first
    /// row is pinned to day 0 by definition, so only the anchor itself moves.
    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
        if self.basis == TimeBasis::Absolute {
            sequencer::reanchor(&mut self.intakes, start_date);
        }
    }

    /// Sets the half-life selection and its custom backing field.
    pub fn set_half_life(&mut self, selection: HalfLifeSelection, custom_hours: Option<f64>) {
        self.half_life = selection;
        self.custom_half_life = custom_hours;
    }

    /// Resets to a single default row and the default half-life, keeping the
    /// start date.
    pub fn clear(&mut self) {
        self.half_life = HalfLifeSelection::default();
        self.custom_half_life = None;
        self.reset_rows();
    }

    // ========== Recomputation ==========

    /// Resolves rows onto the timeline axis, dropping rows with no usable
    /// timestamp or non-positive mass, sorted by coordinate ascending.
    #[must_use]
    pub fn resolve_intakes(&self) -> Vec<ResolvedIntake> {
        let mut resolved: Vec<ResolvedIntake> = match self.basis {
            TimeBasis::Absolute => self
                .intakes
                .iter()
                .filter_map(|intake| {
                    let (date, time) = (intake.date?, intake.time?);
                    Some(ResolvedIntake {
                        id: intake.id,
                        coordinate_hours: basis::absolute_coordinate(date, time),
                        mass_mg: intake.mass_mg(),
                    })
                })
                .collect(),
            TimeBasis::Relative => {
                let times: Vec<Option<NaiveTime>> =
                    self.intakes.iter().map(|i| i.time).collect();
                let offsets = sequencer::infer_day_offsets(&times);
                self.intakes
                    .iter()
                    .zip(offsets)
                    .filter_map(|(intake, day_offset)| {
                        let time = intake.time?;
                        Some(ResolvedIntake {
                            id: intake.id,
                            coordinate_hours: basis::relative_coordinate(day_offset, time),
                            mass_mg: intake.mass_mg(),
                        })
                    })
                    .collect()
            }
        };

        resolved.retain(|r| r.mass_mg > 0);
        resolved.sort_by(|a, b| a.coordinate_hours.total_cmp(&b.coordinate_hours));
        resolved
    }

    /// Rebuilds the sample series from the current state.
    #[must_use]
    pub fn compute_series(&self) -> Vec<Sample> {
        let resolved = self.resolve_intakes();
        let half_life = self.resolved_half_life();
        tracing::debug!(
            intakes = resolved.len(),
            half_life_hours = half_life,
            "recomputing series"
        );
        sample_series(&resolved, half_life)
    }

    /// Formats a timeline coordinate under the active basis.
    #[must_use]
    pub fn format_coordinate(&self, hours: f64) -> String {
        self.basis.format_coordinate(hours)
    }

    /// Probes the series at `query_hours` and formats the nearest sample as
    /// `"<label> • <mg> mg"`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "levels are rounded and far below i64 range"
    )]
    pub fn probe(&self, series: &[Sample], query_hours: f64) -> Option<String> {
        nearest_sample(series, query_hours).map(|sample| {
            format!(
                "{} • {} mg",
                self.format_coordinate(sample.time),
                sample.level.round() as i64
            )
        })
    }

    // ========== Persistence ==========

    /// Rehydrates a session from a persisted snapshot.
    ///
    /// Row ids are reassigned from row position; the persisted row counter is
    /// carried as-is so future ids keep advancing from it.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot, basis: TimeBasis) -> Self {
        let intakes = snapshot
            .intakes
            .iter()
            .enumerate()
            .map(|(index, record)| Intake {
                id: IntakeId::new(index as u64),
                date: record.date,
                time: record.time,
                concentration: record.concentration_selection,
                custom_concentration: record.custom_concentration,
                volume: record.volume_selection,
                custom_volume: record.custom_volume,
            })
            .collect();

        Self {
            basis,
            start_date: snapshot.start_date,
            half_life: snapshot.half_life_selection,
            custom_half_life: snapshot.custom_half_life,
            intakes,
            next_id: snapshot.next_row_id,
        }
    }

    /// Produces the persisted snapshot for the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            half_life_selection: self.half_life,
            custom_half_life: self.custom_half_life,
            start_date: self.start_date,
            intakes: self
                .intakes
                .iter()
                .map(|intake| IntakeRecord {
                    date: intake.date,
                    time: intake.time,
                    concentration_selection: intake.concentration,
                    custom_concentration: intake.custom_concentration,
                    volume_selection: intake.volume,
                    custom_volume: intake.custom_volume,
                })
                .collect(),
            next_row_id: self.next_id,
        }
    }

    fn reset_rows(&mut self) {
        self.intakes = vec![Intake::new(IntakeId::new(0), Some(default_first_time()))];
        self.next_id = 1;
        self.resequence();
    }

    fn take_id(&mut self) -> IntakeId {
        let id = IntakeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: IntakeId) -> Result<usize, SessionError> {
        self.intakes
            .iter()
            .position(|intake| intake.id == id)
            .ok_or(SessionError::UnknownIntake(id))
    }

    /// Re-materializes row dates after a structural or time edit. Only the
    /// absolute basis stores dates; relative day offsets are inferred fresh
    /// on every resolve.
    fn resequence(&mut self) {
        if self.basis == TimeBasis::Absolute {
            sequencer::assign_sequential_dates(&mut self.intakes, self.start_date);
        }
    }
}

/// One hour later on the clock face, wrapping at midnight.
fn plus_one_hour(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt((time.hour() + 1) % 24, time.minute(), 0).unwrap_or(time)
}

// ========== Snapshot Shape ==========

/// Persisted snapshot of an editing session.
///
/// The wire shape is fixed: camelCase keys, selection option-value strings,
/// `"YYYY-MM-DD"` dates and `"HH:MM"` times (empty string when unset).
/// Rehydrating and re-producing a snapshot is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub half_life_selection: HalfLifeSelection,
    pub custom_half_life: Option<f64>,
    pub start_date: NaiveDate,
    pub intakes: Vec<IntakeRecord>,
    pub next_row_id: u64,
}

/// One persisted intake row. Ids are positional and not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    #[serde(with = "opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(with = "opt_clock_time")]
    pub time: Option<NaiveTime>,
    pub concentration_selection: ConcentrationSelection,
    pub custom_concentration: Option<f64>,
    pub volume_selection: VolumeSelection,
    pub custom_volume: Option<f64>,
}

/// `"YYYY-MM-DD"` or empty string for unset, as the editing surface stores
/// date fields.
mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// `"HH:MM"` or empty string for unset, as the editing surface stores time
/// fields.
mod opt_clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
