//! Startup failures
//!
//! Everything that can go wrong happens before the first frame. Once the loop is
//! running the simulation has no failure modes of its own.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing sprite asset `{name}`")]
    MissingAsset { name: String },

    #[error("failed to read tuning file {}: {source}", path.display())]
    TuningRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("failed to read settings file {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid seed `{0}`")]
    InvalidSeed(String),

    #[error("invalid frame count `{0}`")]
    InvalidFrameCount(String),
}
