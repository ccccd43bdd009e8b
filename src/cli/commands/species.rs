//! `timberlist species` command - list the wood density table

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::GlobalOpts;
use crate::entities::species::SPECIES_TABLE;

#[derive(clap::Args, Debug)]
pub struct SpeciesArgs {
    /// Only show species whose name contains this text
    #[arg(long, short = 'f')]
    pub filter: Option<String>,
}

pub fn run(args: SpeciesArgs, global: &GlobalOpts) -> Result<()> {
    let filter = args.filter.as_deref().map(str::to_lowercase);

    let entries: Vec<_> = SPECIES_TABLE
        .iter()
        .filter(|s| match &filter {
            Some(f) => s.name.to_lowercase().contains(f),
            None => true,
        })
        .collect();

    let mut builder = Builder::default();
    builder.push_record(["Species", "Density (green, g/cm3)"]);
    for species in &entries {
        let density = if species.is_model {
            "from model".to_string()
        } else {
            format!("{:.3}", species.density)
        };
        builder.push_record([species.name.to_string(), density]);
    }

    println!("{}", builder.build().with(Style::sharp()));
    if !global.quiet {
        println!("{} species", entries.len());
    }

    Ok(())
}
