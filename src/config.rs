//! Ledger configuration.
//!
//! Read from `--config <path>` or `~/.orbus/config.toml`. Every key is
//! optional; a missing default file means built-in settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{key} must be at least 1 in {path}")]
    NotPositive { key: &'static str, path: PathBuf },
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Shown in the bulletin title.
    pub guild_name: String,

    /// Shown in section descriptions.
    pub dungeon_name: String,

    /// Entries per character leaderboard.
    pub leaderboard_size: usize,

    /// Reports listed per depth under Cautionary Tales.
    pub incident_limit: usize,

    /// `lastContext` tag that marks a near-death report.
    pub incident_context: String,

    /// Print section headers even when a section has nothing to list.
    pub show_empty_sections: bool,

    /// Link printed under the title. Omitted when unset.
    pub hall_of_fame_url: Option<String>,

    /// Link printed at the bottom. Omitted when unset.
    pub contribute_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            guild_name: "Orbus Guild".to_string(),
            dungeon_name: "Orbus Dungeon".to_string(),
            leaderboard_size: 3,
            incident_limit: 10,
            incident_context: "HURT".to_string(),
            show_empty_sections: true,
            hall_of_fame_url: Some(
                "https://docs.google.com/document/d/1Fhf895mETdZ8RjlRRrYIf9NfoNbmntS7pEU_3ZD8vW4/edit?usp=sharing"
                    .to_string(),
            ),
            contribute_url: Some(
                "https://docs.google.com/spreadsheets/d/1eK9bA9hci_TLuzA6u8lmSHcM92mODq_ehQ1NM6G2ITU/edit?usp=sharing"
                    .to_string(),
            ),
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse and validate one TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if settings.leaderboard_size == 0 {
            return Err(ConfigError::NotPositive {
                key: "leaderboard-size",
                path: path.to_path_buf(),
            });
        }
        if settings.incident_limit == 0 {
            return Err(ConfigError::NotPositive {
                key: "incident-limit",
                path: path.to_path_buf(),
            });
        }

        Ok(settings)
    }

    /// The default config file path: `~/.orbus/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".orbus").join("config.toml"))
    }
}
