use std::path::PathBuf;

use crate::game::{Cell, WallSegment};

/// Reasons the authoritative state refuses an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("game is already over")]
    GameOver,

    #[error("pawn cannot move from {from} to {to}")]
    IllegalMove { from: Cell, to: Cell },

    #[error("no walls remaining")]
    NoWallsRemaining,

    #[error("wall {0} overlaps another wall or blocks a player")]
    IllegalWall(WallSegment),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
