// src/engine/mod.rs
pub mod indices;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::bands::{Band, BandSample};
use crate::catalog::{catalog, IndexId};

/// Denominators below this magnitude are treated as degenerate.
pub const EPSILON: f64 = 1e-9;

/// Why a single index came out undefined for a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undefined {
    /// A band referenced by the formula is absent from the sample.
    MissingBand(Band),
    /// A denominator magnitude fell below [`EPSILON`].
    DegenerateDenominator,
    /// A non-positive base raised to a fractional exponent.
    NonPositivePower,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined::MissingBand(band) => write!(f, "missing band {band}"),
            Undefined::DegenerateDenominator => write!(f, "degenerate denominator"),
            Undefined::NonPositivePower => {
                write!(f, "non-positive base with fractional exponent")
            }
        }
    }
}

/// The outcome of evaluating one index against one sample.
///
/// Undefined is a value, not an error: a bad denominator for one index never
/// aborts the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexValue {
    Defined(f64),
    Undefined(Undefined),
}

impl IndexValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndexValue::Defined(v) => Some(*v),
            IndexValue::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, IndexValue::Defined(_))
    }
}

impl From<Result<f64, Undefined>> for IndexValue {
    fn from(result: Result<f64, Undefined>) -> Self {
        match result {
            Ok(v) => IndexValue::Defined(v),
            Err(reason) => IndexValue::Undefined(reason),
        }
    }
}

// Undefined serializes as null so chart consumers see a gap, not a sentinel.
impl Serialize for IndexValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndexValue::Defined(v) => serializer.serialize_f64(*v),
            IndexValue::Undefined(_) => serializer.serialize_none(),
        }
    }
}

/// Trait for spectral index calculators.
pub trait SpectralIndex: Send + Sync {
    /// Evaluate the formula against a single sample.
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined>;

    /// Bands the formula reads.
    fn required_bands(&self) -> &[Band];
}

/// Fetch a band or mark the index undefined.
pub(crate) fn require(sample: &BandSample, band: Band) -> Result<f64, Undefined> {
    sample.get(band).ok_or(Undefined::MissingBand(band))
}

/// One entry per requested-and-known index, in catalog declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexResult {
    entries: Vec<(IndexId, IndexValue)>,
}

impl IndexResult {
    pub fn get(&self, id: IndexId) -> Option<IndexValue> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexId, IndexValue)> + '_ {
        self.entries.iter().copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = IndexId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for IndexResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id.name(), value)?;
        }
        map.end()
    }
}

/// Compute the requested indices for one sample.
///
/// With `selected = None` every catalog entry is evaluated. A selection
/// restricts the result to the requested ids; entries keep the catalog's
/// declaration order regardless of selection order. Missing bands and
/// degenerate denominators surface as per-index undefined markers.
pub fn compute(sample: &BandSample, selected: Option<&[IndexId]>) -> IndexResult {
    let entries = catalog()
        .iter()
        .filter(|def| match selected {
            Some(ids) => ids.contains(&def.id),
            None => true,
        })
        .map(|def| (def.id, IndexValue::from(def.evaluate(sample))))
        .collect();

    IndexResult { entries }
}
