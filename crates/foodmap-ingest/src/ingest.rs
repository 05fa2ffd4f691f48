//! The ingestion run: walk feature files, classify, insert

use crate::error::IngestError;
use crate::feature::{FeatureCollection, Geometry};
use foodmap_classifier::{evaluate_tags_opt, file_default};
use foodmap_domain::traits::PlaceStore;
use foodmap_domain::{Category, NewVenue};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Feature files processed
    pub files: usize,

    /// Venues inserted
    pub inserted: usize,

    /// Features skipped (no name)
    pub skipped: usize,
}

impl IngestReport {
    /// One-line operator summary
    pub fn summary(&self) -> String {
        format!(
            "{} file(s) processed, {} venue(s) inserted, {} feature(s) skipped",
            self.files, self.inserted, self.skipped
        )
    }
}

/// Seed the catalog with every well-known category
///
/// Idempotent: already-present rows are left untouched.
pub fn seed_catalog<S>(store: &mut S) -> Result<(), IngestError>
where
    S: PlaceStore,
    S::Error: Display,
{
    for category in Category::ALL {
        store
            .seed_category(&category.label())
            .map_err(|e| IngestError::Store(e.to_string()))?;
    }
    Ok(())
}

/// Ingest every feature file under `source_dir`
///
/// Seeds the catalog first, then processes files in sorted path order
/// (one level of partition subdirectories such as `food/` and `drink/`
/// is descended into). Each named feature becomes one venue; category
/// assignment prefers the structured-tag rules and falls back to the
/// source file's default.
pub fn run<S>(source_dir: &Path, store: &mut S) -> Result<IngestReport, IngestError>
where
    S: PlaceStore,
    S::Error: Display,
{
    seed_catalog(store)?;

    let files = feature_files(source_dir)?;
    let mut report = IngestReport::default();

    for path in &files {
        ingest_file(path, store, &mut report)?;
    }

    tracing::info!("Ingestion complete: {}", report.summary());
    Ok(report)
}

fn ingest_file<S>(
    path: &Path,
    store: &mut S,
    report: &mut IngestReport,
) -> Result<(), IngestError>
where
    S: PlaceStore,
    S::Error: Display,
{
    let raw = fs::read_to_string(path)?;
    let collection: FeatureCollection =
        serde_json::from_str(&raw).map_err(|source| IngestError::Parse {
            file: path.display().to_string(),
            source,
        })?;

    let file_name = path.to_string_lossy();
    let fallback = file_default(&file_name);
    report.files += 1;

    tracing::info!(
        "Ingesting {} ({} features, fallback {})",
        path.display(),
        collection.features.len(),
        fallback
    );

    for feature in &collection.features {
        let Some(name) = feature.properties.name.as_deref() else {
            tracing::debug!("Skipping unnamed feature in {}", path.display());
            report.skipped += 1;
            continue;
        };

        let categories = evaluate_tags_opt(&feature.properties.tags())
            .unwrap_or_else(|| vec![fallback]);
        let (lat, lon) = feature
            .geometry
            .as_ref()
            .and_then(Geometry::point)
            .unwrap_or((0.0, 0.0));

        let venue = NewVenue {
            name: name.to_string(),
            description: feature.properties.description.clone(),
            lat,
            lon,
            primary_category: categories[0].id(),
            categories: categories.iter().map(Category::id).collect(),
        };
        store
            .insert_venue(&venue)
            .map_err(|e| IngestError::Store(e.to_string()))?;
        report.inserted += 1;
    }

    Ok(())
}

/// Collect feature files under `dir`, descending one partition level
fn feature_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();
    collect_into(dir, 0, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, depth: usize, files: &mut Vec<PathBuf>) -> Result<(), IngestError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if depth == 0 {
                collect_into(&path, depth + 1, files)?;
            }
        } else if is_feature_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_feature_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("geojson") || ext.eq_ignore_ascii_case("json")
    )
}
