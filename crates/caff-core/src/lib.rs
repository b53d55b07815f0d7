//! Core engine for the caffeine timeline.
//!
//! This crate contains the fundamental types and logic for:
//! - Decay: single-compartment first-order elimination
//! - Sampling: fixed-step `(time, level)` series over all intakes
//! - Date sequencing: day-rollover inference and offset-preserving
//!   re-anchoring
//! - Session state: the one explicit structure the editing surface mutates,
//!   plus its lossless persisted snapshot

pub mod basis;
pub mod decay;
pub mod intake;
pub mod lookup;
pub mod presets;
pub mod sampler;
pub mod sequencer;
pub mod session;
pub mod types;

pub use basis::{TimeBasis, absolute_coordinate, relative_coordinate};
pub use intake::Intake;
pub use lookup::nearest_sample;
pub use presets::{ConcentrationSelection, UnknownPreset, VolumeSelection};
pub use sampler::{HORIZON_HOURS, SAMPLE_STEP_HOURS, Sample, SampledIntake, sample_series};
pub use session::{IntakeRecord, ResolvedIntake, Session, SessionError, Snapshot};
pub use types::{DEFAULT_HALF_LIFE_HOURS, HalfLifeSelection, IntakeId};
