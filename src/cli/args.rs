//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs,
    cutlist::CutlistArgs,
    inspect::InspectArgs,
    species::SpeciesArgs,
};

#[derive(Parser)]
#[command(name = "timberlist")]
#[command(author, version, about = "Lumber cut/order lists from CAD selection exports")]
#[command(
    long_about = "Computes construction-lumber dimensions, board-footage and mass for the \
occurrences in a CAD selection export, and writes the order list as CSV."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the cut/order list CSV from a selection export
    Cutlist(CutlistArgs),

    /// Show the computed timber records without writing a file
    Inspect(InspectArgs),

    /// List the wood species density table
    Species(SpeciesArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Output format for inspect
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON format (for programming)
    Json,
}

/// Snapping resolution choice on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliResolution {
    /// Snap dimensions to 1/8 inch
    Eighth,
    /// Snap dimensions to 1/4 inch
    Quarter,
}

impl From<CliResolution> for crate::core::Resolution {
    fn from(value: CliResolution) -> Self {
        match value {
            CliResolution::Eighth => crate::core::Resolution::Eighth,
            CliResolution::Quarter => crate::core::Resolution::Quarter,
        }
    }
}
