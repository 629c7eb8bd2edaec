//! Error types for the Talent Map library.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run.
///
/// Unresolved locations, unclassifiable titles and malformed rows are not errors;
/// they fall back to defaults and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize talent map: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
