// src/batch.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, IndexId};
use crate::io::writer::write_json;
use crate::series::{DatedSample, SampleSeries};
use crate::stats::stats_report;
use crate::utils::cache::SeriesCache;
use crate::utils::scaling::dn_to_reflectance;

#[derive(Deserialize, Serialize, Debug)]
pub struct BatchConfig {
    #[serde(default)]
    pub global: GlobalParams,
    pub jobs: Vec<Job>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct GlobalParams {
    /// Pretty-print output documents.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// When set, inputs hold raw digital numbers scaled by this factor.
    #[serde(default)]
    pub dn_scale: Option<f64>,
    /// Index selection applied to every job unless overridden.
    #[serde(default)]
    pub indexes: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub indexes: Option<Vec<String>>,
    /// Write chart statistics instead of per-date index values.
    #[serde(default)]
    pub stats: bool,
    #[serde(default)]
    pub dn_scale: Option<f64>,
    #[serde(default)]
    pub pretty: Option<bool>,
}

/// Resolve a name selection against the catalog. Unknown names drop out
/// silently; `None` means the whole catalog.
fn resolve_selection(names: Option<&Vec<String>>) -> Option<Vec<IndexId>> {
    names.map(|names| catalog().select(names))
}

/// Run every job in a batch configuration file.
///
/// Inputs are parsed once and shared across jobs through the series cache.
pub fn process_batch(config_path: &Path) -> Result<()> {
    // Read and parse configuration file
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let config: BatchConfig = serde_json::from_str(&config_content)
        .with_context(|| format!("invalid batch configuration in {}", config_path.display()))?;

    let cache = SeriesCache::new();

    println!("Starting batch processing with {} jobs...", config.jobs.len());

    for (i, job) in config.jobs.iter().enumerate() {
        println!(
            "[{}/{}] Processing {} -> {}",
            i + 1,
            config.jobs.len(),
            job.input.display(),
            job.output.display()
        );

        // Get parameters, with job-specific overrides
        let pretty = job.pretty.unwrap_or(config.global.pretty);
        let dn_scale = job.dn_scale.or(config.global.dn_scale);
        let names = job.indexes.as_ref().or(config.global.indexes.as_ref());
        let selected = resolve_selection(names);

        let mut series = (*cache.get_series(&job.input)?).clone();
        if let Some(scale) = dn_scale {
            series = scale_series(&series, scale);
        }

        let results = series.evaluate(selected.as_deref());

        if job.stats {
            write_json(&stats_report(&results), &job.output, pretty)?;
        } else {
            write_json(&results, &job.output, pretty)?;
        }
    }

    println!("Batch processing complete!");
    Ok(())
}

fn scale_series(series: &SampleSeries, scale: f64) -> SampleSeries {
    SampleSeries::new(
        series
            .samples
            .iter()
            .map(|sample| DatedSample {
                date: sample.date.clone(),
                bands: dn_to_reflectance(&sample.bands, scale),
            })
            .collect(),
    )
}
