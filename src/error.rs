//! Error type for the few operations that can fail: construction with an
//! invalid configuration and loading/saving the configuration file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A sample store needs room for at least one point per channel.
    #[error("sample capacity must be at least 1")]
    ZeroCapacity,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config (de)serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HOME env var not set")]
    NoHomeDir,
}

pub type GraphResult<T> = Result<T, GraphError>;
