//! Failures from the parts of the crate that touch the outside world.
//!
//! Pruning itself never fails; these errors come from reading configuration and from the
//! command line's JSON input and output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong while loading settings or moving summaries in and out.
pub enum Error {
    /// Reading or writing a file or stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The summary JSON could not be parsed or produced.
    #[error("invalid summary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file exists but could not be parsed.
    #[error("invalid config in {}: {message}", path.display())]
    Config {
        /// Location of the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// The separator setting is not exactly one character.
    #[error("separator must be a single character, got {0:?}")]
    InvalidSeparator(String),
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
