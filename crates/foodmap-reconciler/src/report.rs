//! Run report and diff bookkeeping

use foodmap_domain::{CategoryId, CategoryLabel, VenueId};

/// The before/after category sets for one migrated venue
///
/// Produced only when the stored set and the recomputed set actually
/// differ; `new` is the post-filter target that was (or, in dry-run,
/// would have been) written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationDiff {
    /// The venue whose assignment changed
    pub venue_id: VenueId,

    /// Venue name, for the operator listing
    pub venue_name: String,

    /// Stored category ids before the run
    pub old: Vec<CategoryId>,

    /// Category ids after the run, primary first
    pub new: Vec<CategoryId>,
}

/// Counters and diffs collected over one reconciliation run
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    /// Venues whose assignment was migrated
    pub fixed: usize,

    /// Venues already correct, or skipped by the divergence guard
    pub skipped: usize,

    /// Venues whose write failed and was passed over
    pub failed: usize,

    /// One entry per migrated venue, in venue order
    pub diffs: Vec<ReconciliationDiff>,
}

impl ReconcileReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a migrated venue
    pub fn record_fix(&mut self, diff: ReconciliationDiff) {
        self.fixed += 1;
        self.diffs.push(diff);
    }

    /// Record a venue that needed no change (or was guarded)
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Record a venue whose write failed
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Total venues visited
    pub fn total(&self) -> usize {
        self.fixed + self.skipped + self.failed
    }

    /// One-line operator summary
    pub fn summary(&self) -> String {
        format!(
            "{} venue(s) fixed, {} skipped, {} failed",
            self.fixed, self.skipped, self.failed
        )
    }

    /// Full operator report: summary plus one old → new line per diff
    ///
    /// Ids are resolved to names through the catalog; an id the catalog
    /// does not know renders as `#id`.
    pub fn render(&self, catalog: &[CategoryLabel]) -> String {
        let mut lines = vec![self.summary()];
        for diff in &self.diffs {
            lines.push(format!(
                "  {} (venue {}): [{}] -> [{}]",
                diff.venue_name,
                diff.venue_id,
                names(&diff.old, catalog),
                names(&diff.new, catalog),
            ));
        }
        lines.join("\n")
    }
}

fn names(ids: &[CategoryId], catalog: &[CategoryLabel]) -> String {
    ids.iter()
        .map(|id| {
            catalog
                .iter()
                .find(|label| label.id == *id)
                .map(|label| label.name.clone())
                .unwrap_or_else(|| format!("#{}", id))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
