//! Error types for the battle UI
//!
//! Drawing code follows the SDL2 convention of `Result<(), String>`. The
//! errors here cover everything that is not a raw SDL2 failure and convert
//! into `String` so they can flow through the same `?` chains.

use std::path::PathBuf;

use thiserror::Error;

use crate::battle::{MonsterId, StatKind};

/// Errors raised while updating widgets from game state
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    /// A bar would divide by a maximum stat of zero
    #[error("{monster} has a maximum {stat:?} of zero")]
    ZeroMaxStat { monster: String, stat: StatKind },

    /// The widget refers to a monster the game no longer knows about
    #[error("unknown monster id {0}")]
    UnknownMonster(MonsterId),
}

/// Errors raised while reading configuration or battle setup files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<UiError> for String {
    fn from(error: UiError) -> Self {
        error.to_string()
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}
