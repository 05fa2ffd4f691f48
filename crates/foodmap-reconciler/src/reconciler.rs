//! Core reconciliation loop

use crate::{ReconcilerConfig, ReconcilerError, ReconcileReport, ReconciliationDiff};
use foodmap_classifier::evaluate;
use foodmap_domain::traits::PlaceStore;
use foodmap_domain::{Category, CategoryId, VenueRecord};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Re-derives category assignments for stored venues and migrates stale
/// ones
///
/// For each venue the stored association set (or, when absent, the legacy
/// primary column) is compared against a fresh [`evaluate`] result; venues
/// that differ get a transactional replace-all write plus a primary-column
/// update, everything else is counted as skipped. The loop is sequential;
/// the evaluator's purity would make it safe to parallelize, but venue
/// populations here are small enough that it has never been worth it.
///
/// # Examples
///
/// ```no_run
/// use foodmap_reconciler::{Reconciler, ReconcilerConfig};
/// use foodmap_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new("foodmap.db")?;
/// let reconciler = Reconciler::new(ReconcilerConfig::default());
/// let report = reconciler.run(&mut store)?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct Reconciler {
    config: ReconcilerConfig,
}

impl Reconciler {
    /// Create a new Reconciler with the given configuration
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    /// Create a Reconciler with default configuration
    pub fn default_config() -> Self {
        Self::new(ReconcilerConfig::default())
    }

    /// Reconcile every stored venue against the text classifier
    ///
    /// Returns the run report. Fails only when the catalog or the venue
    /// list cannot be read, or when a venue write fails under
    /// `fail_fast`; an ordinary per-venue write failure is logged,
    /// counted, and stepped over.
    pub fn run<S>(&self, store: &mut S) -> Result<ReconcileReport, ReconcilerError>
    where
        S: PlaceStore,
        S::Error: Display,
    {
        let catalog = store
            .categories()
            .map_err(|e| ReconcilerError::Store(e.to_string()))?;
        let known: BTreeSet<CategoryId> = catalog.iter().map(|label| label.id).collect();
        if known.is_empty() {
            tracing::warn!("Category catalog is empty; every venue will be skipped");
        }

        let venues = store
            .venues()
            .map_err(|e| ReconcilerError::Store(e.to_string()))?;
        tracing::info!(
            "Reconciling {} venue(s) against {} catalog entries{}",
            venues.len(),
            known.len(),
            if self.config.dry_run { " (dry run)" } else { "" }
        );

        let mut report = ReconcileReport::new();
        for venue in &venues {
            self.reconcile_venue(venue, &known, store, &mut report)?;
        }

        tracing::info!("Reconciliation complete: {}", report.summary());
        Ok(report)
    }

    fn reconcile_venue<S>(
        &self,
        venue: &VenueRecord,
        known: &BTreeSet<CategoryId>,
        store: &mut S,
        report: &mut ReconcileReport,
    ) -> Result<(), ReconcilerError>
    where
        S: PlaceStore,
        S::Error: Display,
    {
        let stored = store
            .venue_categories(venue.id)
            .map_err(|e| ReconcilerError::Store(e.to_string()))?;
        // Venues predating the association table only carry the legacy
        // primary column.
        let current = if stored.is_empty() {
            vec![venue.primary_category]
        } else {
            stored
        };

        let target: Vec<CategoryId> = evaluate(&venue.name, venue.description.as_deref())
            .iter()
            .map(Category::id)
            .collect();

        if same_set(&current, &target) {
            report.record_skip();
            return Ok(());
        }

        // Divergence guard: the rule tables may reference categories this
        // deployment's catalog does not have yet.
        let filtered: Vec<CategoryId> = target
            .into_iter()
            .filter(|id| known.contains(id))
            .collect();
        if filtered.is_empty() {
            tracing::warn!(
                "Venue {} ({}): recomputed categories are all missing from the catalog, skipping",
                venue.id,
                venue.name
            );
            report.record_skip();
            return Ok(());
        }
        // The catalog may have swallowed exactly the labels that differed;
        // re-checking keeps a catalog-lagging deployment idempotent.
        if same_set(&current, &filtered) {
            report.record_skip();
            return Ok(());
        }

        let diff = ReconciliationDiff {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            old: current,
            new: filtered.clone(),
        };

        if self.config.dry_run {
            tracing::info!(
                "DRY RUN: would migrate venue {} ({}) to {:?}",
                venue.id,
                venue.name,
                filtered
            );
            report.record_fix(diff);
            return Ok(());
        }

        match store.replace_venue_categories(venue.id, &filtered) {
            Ok(()) => report.record_fix(diff),
            Err(e) => {
                tracing::error!(
                    "Venue {} ({}): category replacement failed: {}",
                    venue.id,
                    venue.name,
                    e
                );
                report.record_failure();
                if self.config.fail_fast {
                    return Err(ReconcilerError::Store(e.to_string()));
                }
            }
        }

        Ok(())
    }
}

fn same_set(a: &[CategoryId], b: &[CategoryId]) -> bool {
    let a: BTreeSet<_> = a.iter().collect();
    let b: BTreeSet<_> = b.iter().collect();
    a == b
}
