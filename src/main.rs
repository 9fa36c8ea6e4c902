// src/main.rs
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use aqua_calc::batch;
use aqua_calc::catalog::{catalog, IndexDefinition, IndexId};
use aqua_calc::cli::{Cli, Commands};
use aqua_calc::engine::compute;
use aqua_calc::io::{read_sample, read_series, write_json};
use aqua_calc::series::SampleSeries;
use aqua_calc::stats::stats_report;
use aqua_calc::utils::scaling::dn_to_reflectance;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compute { input, indexes } => {
            let mut sample = read_sample(input)?;
            if let Some(scale) = cli.dn_scale {
                sample = dn_to_reflectance(&sample, scale);
            }
            let selected = selection(indexes);
            let result = compute(&sample, selected.as_deref());
            write_json(&result, &cli.output, cli.pretty)?;
        }
        Commands::Series { input, indexes } => {
            let series = load_series(input, cli.dn_scale)?;
            let selected = selection(indexes);
            let results = series.evaluate(selected.as_deref());
            write_json(&results, &cli.output, cli.pretty)?;
        }
        Commands::Stats { input, indexes } => {
            let series = load_series(input, cli.dn_scale)?;
            let selected = selection(indexes);
            let results = series.evaluate(selected.as_deref());
            write_json(&stats_report(&results), &cli.output, cli.pretty)?;
        }
        Commands::Batch { config } => {
            batch::process_batch(config)?;
        }
        Commands::List { index } => match index {
            Some(name) => match IndexId::parse(name).and_then(|id| catalog().get(id)) {
                Some(def) => print_definition(def),
                None => eprintln!("unknown index: {name}"),
            },
            None => {
                for def in catalog().iter() {
                    print_definition(def);
                    println!();
                }
            }
        },
    }

    Ok(())
}

fn selection(names: &[String]) -> Option<Vec<IndexId>> {
    if names.is_empty() {
        None
    } else {
        Some(catalog().select(names))
    }
}

fn load_series(input: &Path, dn_scale: Option<f64>) -> Result<SampleSeries> {
    let mut series = read_series(input)?;
    if let Some(scale) = dn_scale {
        for sample in &mut series.samples {
            sample.bands = dn_to_reflectance(&sample.bands, scale);
        }
    }
    Ok(series)
}

fn print_definition(def: &IndexDefinition) {
    println!("{} - {}", def.id, def.display_name);
    println!("  formula: {}", def.formula);
    if let Some(unit) = def.unit {
        println!("  unit: {unit}");
    }
    let (min, max) = def.display_range;
    println!("  display range: [{min}, {max}]");
    let bands = def
        .required_bands()
        .iter()
        .map(|b| format!("{} ({})", b, b.sentinel2_code()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  bands: {bands}");
    println!("  {}", def.description);
    for reference in def.references {
        println!("  ref: {reference}");
    }
}
