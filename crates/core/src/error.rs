use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for one version-store invocation.
///
/// Every variant is fatal: the invocation aborts before any state is persisted,
/// so a failed run never leaves a partially written record behind.
#[derive(Debug, Error)]
pub enum Error {
    /// The version file exists but could not be read
    #[error("failed to read version file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The version file (or its placeholder) could not be written
    #[error("failed to write version file {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The version file exists but a line is not a valid `KEY=value` entry
    #[error("invalid entry at line {line} in version file {path}")]
    Parse { path: PathBuf, line: usize },
    /// The versioning configuration is unusable (empty task sets, bad JSON)
    #[error("invalid versioning config: {0}")]
    Config(String),
}
