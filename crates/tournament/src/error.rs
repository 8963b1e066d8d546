//! Tournament error types

use search_core::SearchError;
use std::fmt;
use thiserror::Error;

/// The caller-supplied input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    StartingRole,
    RatingA,
    RatingB,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::StartingRole => "starting role",
            InputField::RatingA => "rating A",
            InputField::RatingB => "rating B",
        };
        f.write_str(name)
    }
}

/// Errors returned by the tournament runner and its persistence helpers.
#[derive(Error, Debug)]
pub enum TournamentError {
    /// Rejected before any game was played
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: InputField, reason: String },

    /// A search failed mid-tournament; the whole tournament is abandoned
    #[error("search failed: {0}")]
    Domain(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

impl TournamentError {
    pub(crate) fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        TournamentError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
