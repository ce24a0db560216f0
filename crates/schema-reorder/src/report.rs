use std::io::{self, Write};
use std::path::Path;

use crate::RunOutcome;
use crate::order::ReorderReport;

fn write_warnings(out: &mut impl Write, report: &ReorderReport) -> io::Result<()> {
    for key in &report.missing {
        writeln!(out, "warning: {key} not found in schema properties")?;
    }
    for key in &report.extra {
        writeln!(out, "warning: {key} not in desired order list, adding at end")?;
    }
    Ok(())
}

fn write_order(out: &mut impl Write, label: &str, report: &ReorderReport) -> io::Result<()> {
    writeln!(out, "  {label}: [{}]", report.new_order.join(", "))
}

/// Print the human-readable summary of a run.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome(
    out: &mut impl Write,
    path: &Path,
    outcome: &RunOutcome,
    verbose: bool,
) -> io::Result<()> {
    match outcome {
        RunOutcome::Skipped => {
            writeln!(
                out,
                "No configureRules properties in {}, nothing to reorder",
                path.display()
            )
        }
        RunOutcome::Written(report) => {
            write_warnings(out, report)?;
            writeln!(
                out,
                "✓ Reordered configureRules properties from {} items",
                report.original_len
            )?;
            write_order(out, "New order", report)?;
            writeln!(out, "✓ Schema saved with reordered properties")
        }
        RunOutcome::Ordered(report) => {
            write_warnings(out, report)?;
            writeln!(
                out,
                "✓ configureRules properties in {} are in the desired order",
                path.display()
            )?;
            if verbose {
                write_order(out, "Order", report)?;
            }
            Ok(())
        }
        RunOutcome::Unordered(report) => {
            write_warnings(out, report)?;
            writeln!(
                out,
                "✗ configureRules properties in {} are out of order",
                path.display()
            )?;
            write_order(out, "Expected order", report)
        }
    }
}
