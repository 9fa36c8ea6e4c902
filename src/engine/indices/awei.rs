// src/engine/indices/awei.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined};

/// Automated Water Extraction Index:
/// 4 * (Green - SWIR1600) - (0.25 * NIR + 2.75 * SWIR2200).
///
/// A weighted sum, not a normalized difference; the range is unbounded.
pub struct Awei;

const BANDS: [Band; 4] = [Band::Green, Band::Swir1600, Band::Nir, Band::Swir2200];

impl SpectralIndex for Awei {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let green = require(sample, Band::Green)?;
        let swir1 = require(sample, Band::Swir1600)?;
        let nir = require(sample, Band::Nir)?;
        let swir2 = require(sample, Band::Swir2200)?;

        Ok(4.0 * (green - swir1) - (0.25 * nir + 2.75 * swir2))
    }

    fn required_bands(&self) -> &[Band] {
        &BANDS
    }
}
