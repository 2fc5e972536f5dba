//! Startup errors.
//!
//! Everything here is fatal and raised before any file is touched. Per-file
//! problems during a run are [`smally_tools::Error`]s recorded in the
//! [`RunSummary`](crate::summary::RunSummary) instead.

use std::path::PathBuf;

/// Invalid command line, configuration, or missing external tool.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("path {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("No picture type chosen")]
    NoPictureType,

    #[error("Interval time must not be negative (got {0} ms)")]
    NegativeInterval(i64),

    #[error("Time window must be positive (got {0})")]
    NonPositiveTimeWindow(f64),

    #[error("--jpegtran only supports JPG")]
    JpegtranRequiresJpg,

    #[error("required tool is missing: {0}")]
    MissingTool(smally_tools::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<smally_common::Error> for ConfigError {
    fn from(err: smally_common::Error) -> Self {
        match err {
            smally_common::Error::InvalidInput(_) => ConfigError::NoPictureType,
            smally_common::Error::Io(e) => ConfigError::Io(e),
        }
    }
}
