//! Core domain errors.
//!
//! Resolution itself is total; these only cover loading report data and
//! looking up steps at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Core domain errors for Hookstep.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Step not found in the report.
    #[error("Step not found: {0}")]
    StepNotFound(String),

    /// Report file could not be read.
    #[error("Failed to read report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
