// src/stats.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{catalog, IndexId};
use crate::series::SeriesResults;

/// Median of a slice. Returns `None` for an empty slice; averages the two
/// middle elements for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Round to two decimal places, the precision the charts display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Time series of one index over a date range, chart-ready: parallel date
/// and value vectors, values rounded to two places. Dates where the index
/// came out undefined are dropped rather than plotted as sentinels.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IndexStats {
    pub dates: Vec<String>,
    pub medians: Vec<f64>,
}

impl IndexStats {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Extract the chart series for one index from evaluated results.
pub fn index_stats(results: &SeriesResults, id: IndexId) -> IndexStats {
    let mut dates = Vec::new();
    let mut medians = Vec::new();

    for (date, result) in results.iter() {
        if let Some(value) = result.get(id).and_then(|v| v.as_f64()) {
            dates.push(date.to_string());
            medians.push(round2(value));
        }
    }

    IndexStats { dates, medians }
}

/// Chart series for every index present in the results, in catalog order.
pub struct StatsReport {
    entries: Vec<(IndexId, IndexStats)>,
}

impl StatsReport {
    pub fn get(&self, id: IndexId) -> Option<&IndexStats> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexId, &IndexStats)> {
        self.entries.iter().map(|(id, stats)| (*id, stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, stats) in &self.entries {
            map.serialize_entry(id.name(), stats)?;
        }
        map.end()
    }
}

/// Build the full report from evaluated results. Indices that were never
/// computed (or never defined) are left out.
pub fn stats_report(results: &SeriesResults) -> StatsReport {
    let entries = catalog()
        .iter()
        .map(|def| (def.id, index_stats(results, def.id)))
        .filter(|(_, stats)| !stats.is_empty())
        .collect();

    StatsReport { entries }
}
