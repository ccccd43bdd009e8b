//! `timberlist inspect` command - preview computed records in the terminal

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{compute_records, resolve_species, truncate_str};
use crate::cli::{CliResolution, GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Selection export file (YAML)
    pub export: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,

    /// Part number prefix
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Species for the mass estimate ("Model" takes the modeled mass)
    #[arg(long, short = 's')]
    pub species: Option<String>,

    /// Snapping resolution for displayed dimensions
    #[arg(long, short = 'r', value_enum)]
    pub resolution: Option<CliResolution>,
}

pub fn run(args: InspectArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let species = resolve_species(args.species.as_deref(), &config)?;
    let resolution = args
        .resolution
        .map(Into::into)
        .unwrap_or_else(|| config.resolution());
    let prefix = args.prefix.clone().unwrap_or_else(|| config.prefix());

    let records = compute_records(&args.export, species, resolution, &prefix, global)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record([
                "Part #", "Name", "Qty", "Order", "Bdft", "Total", "Mass (kg)", "Material",
            ]);

            for record in &records {
                let props = &record.properties;
                builder.push_record([
                    record.part_number.clone(),
                    truncate_str(&record.name, 25),
                    record.quantity.to_string(),
                    format!(
                        "{} ft x {} x {}",
                        props.order_length_ft, props.order_width, props.order_height
                    ),
                    props.board_feet.to_string(),
                    record.total_board_feet().to_string(),
                    format!("{:.1}", props.mass_kg),
                    truncate_str(&props.material, 20),
                ]);
            }

            println!("{}", builder.build().with(Style::sharp()));
            if !global.quiet {
                let total: u32 = records.iter().map(|r| r.total_board_feet()).sum();
                println!("{} component(s), {} board feet total", records.len(), total);
            }
        }
    }

    Ok(())
}
