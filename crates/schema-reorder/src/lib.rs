#![doc = include_str!("../README.md")]
#![allow(unused_assignments)] // thiserror/miette derive macros trigger false positives

pub mod diagnostics;
pub mod document;
pub mod io;
pub mod order;
mod report;

use std::path::PathBuf;

use bpaf::{Bpaf, ShellComp};

pub use diagnostics::{ParseDiagnostic, ReorderError};
pub use document::{TARGET_PATH, find_target, reorder_document, target_pointer};
pub use order::{DESIRED_ORDER, ReorderReport, reorder_keys};
pub use report::write_outcome;

/// Schema location used when no file is given.
pub const DEFAULT_SCHEMA_PATH: &str = "resources/schemas/config.schema.json";

#[derive(Debug, Clone, Bpaf)]
#[bpaf(generate(reorder_args_inner))]
pub struct ReorderArgs {
    /// Report whether the rules are in order without writing the file
    #[bpaf(long("check"), switch)]
    pub check: bool,

    /// Always print the resulting rule order
    #[bpaf(short('v'), long("verbose"), switch)]
    pub verbose: bool,

    /// Schema file to reorder
    #[bpaf(
        positional("FILE"),
        complete_shell(ShellComp::File { mask: Some("*.json") }),
        fallback(PathBuf::from(DEFAULT_SCHEMA_PATH))
    )]
    pub file: PathBuf,
}

/// Construct the bpaf parser for `ReorderArgs`.
pub fn reorder_args() -> impl bpaf::Parser<ReorderArgs> {
    reorder_args_inner()
}

/// What a run did to the schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The schema has no `configureRules` rule definitions; nothing was written.
    Skipped,
    /// The rules were reordered and the schema was rewritten.
    Written(ReorderReport),
    /// Check mode: the rules already follow the desired order.
    Ordered(ReorderReport),
    /// Check mode: the rules would be moved by a rewrite.
    Unordered(ReorderReport),
}

impl RunOutcome {
    pub fn report(&self) -> Option<&ReorderReport> {
        match self {
            Self::Skipped => None,
            Self::Written(r) | Self::Ordered(r) | Self::Unordered(r) => Some(r),
        }
    }
}

/// Reorder the rule definitions of the schema named by `args` using
/// [`DESIRED_ORDER`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if the rule
/// definitions are not an object, or if the rewritten file cannot be written.
pub fn run(args: &ReorderArgs) -> Result<RunOutcome, ReorderError> {
    run_with_order(args, DESIRED_ORDER)
}

/// Like [`run`], with an explicit order.
///
/// # Errors
///
/// See [`run`].
#[tracing::instrument(skip_all, fields(path = %args.file.display(), check = args.check))]
pub fn run_with_order(args: &ReorderArgs, order: &[&str]) -> Result<RunOutcome, ReorderError> {
    let mut doc = io::load(&args.file)?;

    let Some(report) = reorder_document(&mut doc, order)? else {
        tracing::info!(pointer = %target_pointer(), "no rule definitions, skipping");
        return Ok(RunOutcome::Skipped);
    };

    tracing::info!(
        rules = report.original_len,
        missing = report.missing.len(),
        extra = report.extra.len(),
        changed = report.changed,
        "reordered rule definitions"
    );

    if args.check {
        return Ok(if report.changed {
            RunOutcome::Unordered(report)
        } else {
            RunOutcome::Ordered(report)
        });
    }

    // Render the complete document before touching the file.
    let rendered = io::render(&doc)?;
    io::persist(&args.file, &rendered)?;
    Ok(RunOutcome::Written(report))
}
