//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid half-life selection value.
    #[error("invalid half-life selection: {value}")]
    InvalidHalfLifeSelection { value: String },
}

/// Half-life applied when a custom selection has no usable value, in hours.
pub const DEFAULT_HALF_LIFE_HOURS: f64 = 5.0;

/// Identifier for an intake row.
///
/// Ids come from the session's monotonically increasing row counter, which is
/// persisted as `nextRowId` so ids never repeat within a session document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeId(u64);

impl IntakeId {
    /// Creates an id from its raw counter value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IntakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The metabolism half-life selection.
///
/// One of a fixed set of named presets, or a user-supplied custom value. The
/// selection serializes as its historical option-value string (`"5"`,
/// `"custom"`, ...) so persisted snapshots stay lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HalfLifeSelection {
    /// Fast metabolizer (3 hours).
    Fast,
    /// Typical metabolizer (5 hours).
    #[default]
    Typical,
    /// Slow metabolizer (7 hours).
    Slow,
    /// User-supplied half-life.
    Custom,
}

impl HalfLifeSelection {
    /// Option-value string for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "3",
            Self::Typical => "5",
            Self::Slow => "7",
            Self::Custom => "custom",
        }
    }

    /// Preset hours, or `None` for the custom selection.
    #[must_use]
    pub const fn preset_hours(&self) -> Option<f64> {
        match self {
            Self::Fast => Some(3.0),
            Self::Typical => Some(5.0),
            Self::Slow => Some(7.0),
            Self::Custom => None,
        }
    }

    /// Resolves the selection to a strictly positive number of hours.
    ///
    /// A custom selection with an unset, non-positive, or non-finite value
    /// falls back to [`DEFAULT_HALF_LIFE_HOURS`]. This is the only place that
    /// guarantees the positivity precondition of the decay model.
    #[must_use]
    pub fn resolve(&self, custom_hours: Option<f64>) -> f64 {
        match self.preset_hours() {
            Some(hours) => hours,
            None => custom_hours
                .filter(|h| h.is_finite() && *h > 0.0)
                .unwrap_or(DEFAULT_HALF_LIFE_HOURS),
        }
    }
}

impl fmt::Display for HalfLifeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HalfLifeSelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3" | "fast" => Ok(Self::Fast),
            "5" | "typical" => Ok(Self::Typical),
            "7" | "slow" => Ok(Self::Slow),
            "custom" => Ok(Self::Custom),
            _ => Err(ValidationError::InvalidHalfLifeSelection {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for HalfLifeSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HalfLifeSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_life_roundtrip_all_variants() {
        let variants = [
            HalfLifeSelection::Fast,
            HalfLifeSelection::Typical,
            HalfLifeSelection::Slow,
            HalfLifeSelection::Custom,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: HalfLifeSelection = s.parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn half_life_named_aliases_parse() {
        assert_eq!(
            "fast".parse::<HalfLifeSelection>().unwrap(),
            HalfLifeSelection::Fast
        );
        assert_eq!(
            "slow".parse::<HalfLifeSelection>().unwrap(),
            HalfLifeSelection::Slow
        );
    }

    #[test]
    fn half_life_unknown_selection_errors() {
        let result: Result<HalfLifeSelection, _> = "9000".parse();
        assert!(result.is_err());
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended for presets")]
    fn half_life_presets_resolve_to_their_hours() {
        assert_eq!(HalfLifeSelection::Fast.resolve(None), 3.0);
        assert_eq!(HalfLifeSelection::Typical.resolve(None), 5.0);
        assert_eq!(HalfLifeSelection::Slow.resolve(None), 7.0);
        // Preset selections ignore a stale custom value
        assert_eq!(HalfLifeSelection::Typical.resolve(Some(9.0)), 5.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact values intended for fallback")]
    fn half_life_custom_falls_back_when_unusable() {
        assert_eq!(HalfLifeSelection::Custom.resolve(Some(4.5)), 4.5);
        assert_eq!(HalfLifeSelection::Custom.resolve(None), DEFAULT_HALF_LIFE_HOURS);
        assert_eq!(HalfLifeSelection::Custom.resolve(Some(0.0)), DEFAULT_HALF_LIFE_HOURS);
        assert_eq!(HalfLifeSelection::Custom.resolve(Some(-2.0)), DEFAULT_HALF_LIFE_HOURS);
        assert_eq!(
            HalfLifeSelection::Custom.resolve(Some(f64::NAN)),
            DEFAULT_HALF_LIFE_HOURS
        );
    }

    #[test]
    fn half_life_serde_uses_option_value_strings() {
        let json = serde_json::to_string(&HalfLifeSelection::Typical).unwrap();
        assert_eq!(json, "\"5\"");
        let parsed: HalfLifeSelection = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed, HalfLifeSelection::Custom);
    }

    #[test]
    fn intake_id_display_and_value() {
        let id = IntakeId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }
}
