//! Error types for pde-registry

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] pde_version::Error),

    /// A bundle in an index snapshot declares an unparseable version.
    #[error("invalid version for bundle '{bundle}': {source}")]
    InvalidVersion {
        bundle: String,
        source: pde_version::Error,
    },

    #[error("invalid bundle name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("index snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),

    #[error("failed to parse index snapshot: {0}")]
    SnapshotParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bundle a closure was requested for is not in the index.
    #[error("unknown bundle: {0}")]
    UnknownBundle(String),
}
