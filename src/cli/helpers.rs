//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::core::{Config, Resolution};
use crate::entities::species::{self, Species};
use crate::entities::timber::TimberRecord;
use crate::entities::SelectionExport;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Resolve a species argument against the table, falling back to config.
///
/// Unknown names fail before any computation starts.
pub fn resolve_species(arg: Option<&str>, config: &Config) -> Result<&'static Species> {
    let name = arg.map(str::to_string).unwrap_or_else(|| config.species());
    species::find(&name).ok_or_else(|| {
        miette::miette!(
            "unknown species '{}'. Run 'timberlist species' to list valid names",
            name
        )
    })
}

/// Load an export and run the pipeline - the shared front half of
/// `cutlist` and `inspect`.
pub fn compute_records(
    export_path: &Path,
    species: &Species,
    resolution: Resolution,
    prefix: &str,
    global: &GlobalOpts,
) -> Result<Vec<TimberRecord>> {
    let export = SelectionExport::load(export_path).into_diagnostic()?;
    let occurrences = export.occurrences().into_diagnostic()?;

    if global.verbose {
        eprintln!(
            "{} of {} selection(s) are occurrences",
            occurrences.len(),
            export.selections.len()
        );
    }

    crate::entities::timber::build_records(&occurrences, species, resolution, prefix)
        .into_diagnostic()
}
