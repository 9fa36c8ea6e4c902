// src/io/reader.rs
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bands::BandSample;
use crate::series::{DatedSample, SampleSeries};

// Accept both the wrapped form {"samples": [...]} and a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeriesDocument {
    Wrapped { samples: Vec<DatedSample> },
    Bare(Vec<DatedSample>),
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Load a dated sample series from a JSON file (`-` reads stdin).
pub fn read_series(path: &Path) -> Result<SampleSeries> {
    let content = read_input(path)?;
    let document: SeriesDocument = serde_json::from_str(&content)
        .with_context(|| format!("invalid sample series in {}", path.display()))?;

    let samples = match document {
        SeriesDocument::Wrapped { samples } => samples,
        SeriesDocument::Bare(samples) => samples,
    };

    Ok(SampleSeries::new(samples))
}

/// Load a single band sample from a JSON file (`-` reads stdin).
pub fn read_sample(path: &Path) -> Result<BandSample> {
    let content = read_input(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid band sample in {}", path.display()))
}
