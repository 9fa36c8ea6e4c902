// src/series.rs
use itertools::Itertools;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::bands::{Band, BandSample};
use crate::catalog::IndexId;
use crate::engine::{compute, IndexResult};
use crate::stats::median;

/// One acquisition: a band sample tagged with its "YYYY-MM-DD" date.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct DatedSample {
    pub date: String,
    pub bands: BandSample,
}

/// A dated sequence of band samples, typically one or more acquisitions per
/// satellite revisit date.
#[derive(Debug, Clone, Default, serde::Serialize, Deserialize)]
pub struct SampleSeries {
    pub samples: Vec<DatedSample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<DatedSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct acquisition dates in ascending order.
    pub fn dates(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|s| s.date.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// Evaluate the catalog (or a selection) against every date.
    ///
    /// Cloud-flagged samples are dropped, same-date samples collapse into a
    /// per-band median composite, and dates left without a single clear
    /// sample are omitted. Dates are independent, so they evaluate in
    /// parallel.
    pub fn evaluate(&self, selected: Option<&[IndexId]>) -> SeriesResults {
        let dates = self.dates();

        let entries = dates
            .into_par_iter()
            .filter_map(|date| {
                let clear: Vec<&BandSample> = self
                    .samples
                    .iter()
                    .filter(|s| s.date == date && !s.bands.is_cloudy())
                    .map(|s| &s.bands)
                    .collect();

                if clear.is_empty() {
                    return None;
                }

                let composite = median_composite(&clear);
                Some((date, compute(&composite, selected)))
            })
            .collect();

        SeriesResults { entries }
    }
}

/// Per-band median across samples, the temporal-composite step that
/// suppresses residual noise within one revisit date.
///
/// A band contributes whenever at least one sample carries it. QA60 is a
/// bitmask, not reflectance, and is left out of the composite.
pub fn median_composite(samples: &[&BandSample]) -> BandSample {
    let mut composite = BandSample::new();

    for band in Band::ALL {
        if !band.is_reflectance() {
            continue;
        }
        let values: Vec<f64> = samples.iter().filter_map(|s| s.get(band)).collect();
        if let Some(value) = median(&values) {
            composite.set(band, value);
        }
    }

    composite
}

/// Evaluation output for a whole series: one [`IndexResult`] per date,
/// ascending by date.
#[derive(Debug, Clone)]
pub struct SeriesResults {
    entries: Vec<(String, IndexResult)>,
}

impl SeriesResults {
    pub fn get(&self, date: &str) -> Option<&IndexResult> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexResult)> {
        self.entries.iter().map(|(d, r)| (d.as_str(), r))
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SeriesResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, result) in &self.entries {
            map.serialize_entry(date, result)?;
        }
        map.end()
    }
}
