//! Error types for ingestion

use thiserror::Error;

/// Errors that can occur during feature ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// I/O error while walking or reading source files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file is not a valid feature collection
    #[error("Malformed feature file {file}: {source}")]
    Parse {
        /// Path of the offending file
        file: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),
}
