//! Tournament configuration
//!
//! Loaded from a TOML file; every field has a default so partial files work.
//! The search shape is fixed and cannot be configured, so unknown sections
//! such as `[search]` are rejected.
//!
//! ```toml
//! starting_role = 0
//! seed = 42
//!
//! [player_a]
//! name = "Magnus Carlsen"
//! rating = 20.0
//!
//! [player_b]
//! name = "Fabiano Caruana"
//! rating = 10.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::TournamentError;
use crate::results::PlayerNames;

/// A named, rated participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub rating: f64,
}

/// Everything needed to run one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    /// 0: player A maximizes first, 1: player B does
    pub starting_role: u8,
    pub player_a: PlayerConfig,
    pub player_b: PlayerConfig,
    /// Seed for reproducible noise (None = process-wide generator)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        let names = PlayerNames::default();
        Self {
            starting_role: 0,
            player_a: PlayerConfig {
                name: names.a,
                rating: 20.0,
            },
            player_b: PlayerConfig {
                name: names.b,
                rating: 10.0,
            },
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Parse a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        debug!("Loading tournament config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn names(&self) -> PlayerNames {
        PlayerNames {
            a: self.player_a.name.clone(),
            b: self.player_b.name.clone(),
        }
    }
}
