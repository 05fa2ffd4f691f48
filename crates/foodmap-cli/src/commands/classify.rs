//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use foodmap_classifier::evaluate;

/// Execute the classify command.
///
/// Runs the text classifier directly; no database is opened or touched.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    let labels = evaluate(&args.name, args.description.as_deref());
    println!("{}", formatter.format_classification(&labels)?);
    Ok(())
}
