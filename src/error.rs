use std::path::PathBuf;

use thiserror::Error;

/// errors raised while building, coloring or exporting a schedule
#[derive(Debug, Error)]
pub enum Error {
    /// the registration file could not be read
    #[error("unable to read {path}: {source}")]
    Io {
        /// file that was read
        path: PathBuf,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// a result file could not be written
    #[error("unable to write {path}: {source}")]
    Export {
        /// file that was written
        path: PathBuf,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// statistics could not be serialized
    #[error("unable to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),

    /// the conflict repair did not reach a fixed point.
    /// This is a defect of the coloring procedure, not of the input.
    #[error("conflict repair stalled after {passes} passes ({conflicts} conflicting edges left)")]
    RepairStalled {
        /// number of edge scans performed
        passes: usize,
        /// conflicting edges remaining
        conflicts: usize,
    },

    /// a command line parameter has an invalid value
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter {
        /// parameter name
        name: String,
        /// value given
        value: String,
    },
}

/// result type of the crate
pub type Result<T> = std::result::Result<T, Error>;
