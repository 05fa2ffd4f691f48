//! Configuration for reconciliation runs

use serde::{Deserialize, Serialize};

/// Configuration for the [`Reconciler`](crate::Reconciler)
///
/// # Examples
///
/// ```
/// use foodmap_reconciler::ReconcilerConfig;
///
/// let config = ReconcilerConfig::default();
/// assert!(!config.dry_run);
///
/// let config = ReconcilerConfig::dry_run();
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Compute and report every diff without writing anything
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Abort the run on the first failing venue write instead of logging
    /// it and continuing with the rest of the batch
    /// Default: false
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            fail_fast: false,
        }
    }
}

impl ReconcilerConfig {
    /// Dry-run configuration: full report, no writes
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            fail_fast: false,
        }
    }
}
