//! Drink and serving presets as the single source of truth for selection
//! strings.
//!
//! Selections serialize as their historical option-value strings (`"40"`,
//! `"custom"`, ...) so persisted snapshots stay byte-compatible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for selection strings that match no preset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(String);

/// Caffeine concentration selection for an intake row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConcentrationSelection {
    /// User-supplied mg per 100 ml.
    Custom,
    /// Green tea, 20 mg/100ml.
    GreenTea,
    /// Black tea, 30 mg/100ml.
    BlackTea,
    /// Cola, 32 mg/100ml.
    Cola,
    /// Filtered coffee, 40 mg/100ml.
    #[default]
    FilteredCoffee,
    /// Energy drink, 80 mg/100ml.
    EnergyDrink,
    /// Espresso, 212 mg/100ml.
    Espresso,
}

impl ConcentrationSelection {
    /// Option-value string for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::GreenTea => "20",
            Self::BlackTea => "30",
            Self::Cola => "32",
            Self::FilteredCoffee => "40",
            Self::EnergyDrink => "80",
            Self::Espresso => "212",
        }
    }

    /// Human-readable drink name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::GreenTea => "Green Tea",
            Self::BlackTea => "Black Tea",
            Self::Cola => "Cola",
            Self::FilteredCoffee => "Filtered Coffee",
            Self::EnergyDrink => "Energy Drink",
            Self::Espresso => "Espresso",
        }
    }

    /// Preset concentration, or `None` for the custom selection.
    #[must_use]
    pub const fn mg_per_100ml(&self) -> Option<f64> {
        match self {
            Self::Custom => None,
            Self::GreenTea => Some(20.0),
            Self::BlackTea => Some(30.0),
            Self::Cola => Some(32.0),
            Self::FilteredCoffee => Some(40.0),
            Self::EnergyDrink => Some(80.0),
            Self::Espresso => Some(212.0),
        }
    }
}

impl fmt::Display for ConcentrationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcentrationSelection {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Self::Custom),
            "20" | "green-tea" => Ok(Self::GreenTea),
            "30" | "black-tea" => Ok(Self::BlackTea),
            "32" | "cola" => Ok(Self::Cola),
            "40" | "coffee" | "filtered-coffee" => Ok(Self::FilteredCoffee),
            "80" | "energy-drink" => Ok(Self::EnergyDrink),
            "212" | "espresso" => Ok(Self::Espresso),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl Serialize for ConcentrationSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConcentrationSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serving volume selection for an intake row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VolumeSelection {
    /// User-supplied ml.
    Custom,
    /// Espresso shot, 30 ml.
    EspressoShot,
    /// Small mug, 200 ml.
    #[default]
    SmallMug,
    /// Cup, 250 ml.
    Cup,
    /// Can, 330 ml.
    Can,
    /// Large mug, 350 ml.
    LargeMug,
    /// Bottle, 500 ml.
    Bottle,
}

impl VolumeSelection {
    /// Option-value string for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::EspressoShot => "30",
            Self::SmallMug => "200",
            Self::Cup => "250",
            Self::Can => "330",
            Self::LargeMug => "350",
            Self::Bottle => "500",
        }
    }

    /// Human-readable serving name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::EspressoShot => "Espresso shot",
            Self::SmallMug => "Small mug",
            Self::Cup => "Cup",
            Self::Can => "Can",
            Self::LargeMug => "Large mug",
            Self::Bottle => "Bottle",
        }
    }

    /// Preset volume, or `None` for the custom selection.
    #[must_use]
    pub const fn ml(&self) -> Option<f64> {
        match self {
            Self::Custom => None,
            Self::EspressoShot => Some(30.0),
            Self::SmallMug => Some(200.0),
            Self::Cup => Some(250.0),
            Self::Can => Some(330.0),
            Self::LargeMug => Some(350.0),
            Self::Bottle => Some(500.0),
        }
    }
}

impl fmt::Display for VolumeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeSelection {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Self::Custom),
            "30" | "espresso-shot" => Ok(Self::EspressoShot),
            "200" | "small-mug" => Ok(Self::SmallMug),
            "250" | "cup" => Ok(Self::Cup),
            "330" | "can" => Ok(Self::Can),
            "350" | "large-mug" => Ok(Self::LargeMug),
            "500" | "bottle" => Ok(Self::Bottle),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl Serialize for VolumeSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VolumeSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
