//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use foodmap_domain::{Category, CategoryId, CategoryLabel};
use foodmap_reconciler::ReconcileReport;
use tabled::{builder::Builder, settings::Style};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the category catalog.
    pub fn format_categories(&self, catalog: &[CategoryLabel]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = catalog
                    .iter()
                    .map(|label| {
                        serde_json::json!({
                            "id": label.id.value(),
                            "name": label.name,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name"]);
                for label in catalog {
                    builder.push_record([label.id.to_string(), label.name.clone()]);
                }
                let mut table = builder.build();
                table.with(Style::modern());
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(catalog
                .iter()
                .map(|label| label.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a one-off classification result.
    pub fn format_classification(&self, labels: &[Category]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = labels
                    .iter()
                    .map(|category| {
                        serde_json::json!({
                            "id": category.id().value(),
                            "name": category.name(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(labels
                .iter()
                .map(|category| category.name())
                .collect::<Vec<_>>()
                .join(", ")),
            OutputFormat::Quiet => Ok(labels
                .iter()
                .map(|category| category.id().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a reconciliation report.
    pub fn format_report(
        &self,
        report: &ReconcileReport,
        catalog: &[CategoryLabel],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let diffs: Vec<serde_json::Value> = report
                    .diffs
                    .iter()
                    .map(|diff| {
                        serde_json::json!({
                            "venue_id": diff.venue_id.value(),
                            "venue_name": diff.venue_name,
                            "old": category_names(&diff.old, catalog),
                            "new": category_names(&diff.new, catalog),
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "fixed": report.fixed,
                    "skipped": report.skipped,
                    "failed": report.failed,
                    "diffs": diffs,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = self.summary_line(report);
                if !report.diffs.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Venue", "Name", "Old", "New"]);
                    for diff in &report.diffs {
                        builder.push_record([
                            diff.venue_id.to_string(),
                            diff.venue_name.clone(),
                            category_names(&diff.old, catalog).join(", "),
                            category_names(&diff.new, catalog).join(", "),
                        ]);
                    }
                    let mut table = builder.build();
                    table.with(Style::modern());
                    out.push('\n');
                    out.push_str(&table.to_string());
                }
                Ok(out)
            }
            OutputFormat::Quiet => Ok(report
                .diffs
                .iter()
                .map(|diff| diff.venue_id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn summary_line(&self, report: &ReconcileReport) -> String {
        if !self.color_enabled {
            return report.summary();
        }
        let fixed = format!("{} venue(s) fixed", report.fixed);
        let fixed = if report.fixed > 0 {
            fixed.green().to_string()
        } else {
            fixed
        };
        let failed = format!("{} failed", report.failed);
        let failed = if report.failed > 0 {
            failed.red().to_string()
        } else {
            failed
        };
        format!("{}, {} skipped, {}", fixed, report.skipped, failed)
    }
}

fn category_names(ids: &[CategoryId], catalog: &[CategoryLabel]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            catalog
                .iter()
                .find(|label| label.id == *id)
                .map(|label| label.name.clone())
                .unwrap_or_else(|| format!("#{}", id))
        })
        .collect()
}
