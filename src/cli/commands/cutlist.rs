//! `timberlist cutlist` command - generate the order list CSV

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{compute_records, resolve_species};
use crate::cli::{CliResolution, GlobalOpts};
use crate::core::Config;
use crate::report;

#[derive(clap::Args, Debug)]
pub struct CutlistArgs {
    /// Selection export file (YAML)
    pub export: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Part number prefix
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Species for the mass estimate ("Model" takes the modeled mass)
    #[arg(long, short = 's')]
    pub species: Option<String>,

    /// Snapping resolution for displayed dimensions
    #[arg(long, short = 'r', value_enum)]
    pub resolution: Option<CliResolution>,

    /// Overwrite an existing output file without asking
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: CutlistArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let species = resolve_species(args.species.as_deref(), &config)?;
    let resolution = args
        .resolution
        .map(Into::into)
        .unwrap_or_else(|| config.resolution());
    let prefix = args.prefix.clone().unwrap_or_else(|| config.prefix());

    let records = compute_records(&args.export, species, resolution, &prefix, global)?;
    let csv = report::render_csv(&records).into_diagnostic()?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force && console::user_attended() {
                let overwrite = Confirm::new()
                    .with_prompt(format!("{} exists. Overwrite?", path.display()))
                    .default(false)
                    .interact()
                    .into_diagnostic()?;
                if !overwrite {
                    // declined: whole operation discarded, nothing written
                    if !global.quiet {
                        println!("{} Aborted, no file written", style("○").dim());
                    }
                    return Ok(());
                }
            }

            report::write_atomic(path, &csv).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Wrote {} component(s) to {}",
                    style("✓").green(),
                    records.len(),
                    style(path.display()).cyan()
                );
            }
        }
        None => {
            print!("{}", csv);
        }
    }

    Ok(())
}
