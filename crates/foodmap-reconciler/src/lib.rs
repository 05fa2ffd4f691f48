//! Foodmap Reconciler
//!
//! Batch remediation of stored category assignments: for every venue the
//! text classifier is re-run, the result is diffed against the stored
//! association set, and stale assignments are migrated - additively and
//! destructively - inside one transaction per venue. The run produces an
//! operator report (fixed/skipped/failed counters plus the old→new diff
//! list) and is idempotent: a second run over an unchanged population
//! fixes nothing.
//!
//! Safety properties:
//!
//! - **Divergence guard**: recomputed categories missing from the live
//!   catalog are filtered out, and a venue whose target filters to empty
//!   is skipped with a warning, never force-cleared.
//! - **Per-venue error boundary**: one failing write is logged and
//!   counted, and the rest of the batch continues (unless `fail_fast`).

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod reconciler;
pub mod report;

pub use config::ReconcilerConfig;
pub use error::ReconcilerError;
pub use reconciler::Reconciler;
pub use report::{ReconcileReport, ReconciliationDiff};
