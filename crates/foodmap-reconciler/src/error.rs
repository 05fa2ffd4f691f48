//! Error types for reconciliation

use thiserror::Error;

/// Errors that can occur during a reconciliation run
#[derive(Error, Debug)]
pub enum ReconcilerError {
    /// Storage layer error
    ///
    /// Fatal when reading the catalog or the venue list fails; per-venue
    /// write failures only surface here under `fail_fast`.
    #[error("Storage error: {0}")]
    Store(String),
}
