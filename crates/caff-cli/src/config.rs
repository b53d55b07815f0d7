//! Configuration loading and management.

use std::path::{Path, PathBuf};

use caff_core::TimeBasis;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the snapshot file.
    pub snapshot_path: PathBuf,

    /// Timestamp discipline for the session. The snapshot carries no mode
    /// field, so the same document can be read under either basis.
    pub time_basis: TimeBasis,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            snapshot_path: data_dir.join("snapshot.json"),
            time_basis: TimeBasis::Absolute,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CAFF_*)
        figment = figment.merge(Env::prefixed("CAFF_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for caff.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("caff"))
}

/// Returns the platform-specific data directory for caff.
///
/// On Linux: `~/.local/share/caff`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("caff"))
}
