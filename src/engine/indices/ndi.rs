// src/engine/indices/ndi.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined, EPSILON};

/// Normalized difference calculator: (A - B) / (A + B).
///
/// Covers NDWI (Green/NIR), NDVI (NIR/Red), NDSI (SWIR1600/SWIR2200) and
/// Turbidity (Red/Green) by band choice alone.
pub struct NormalizedDifference {
    bands: [Band; 2],
}

impl NormalizedDifference {
    pub fn new(band_a: Band, band_b: Band) -> Self {
        Self {
            bands: [band_a, band_b],
        }
    }
}

impl SpectralIndex for NormalizedDifference {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let a = require(sample, self.bands[0])?;
        let b = require(sample, self.bands[1])?;

        let denominator = a + b;
        if denominator.abs() < EPSILON {
            return Err(Undefined::DegenerateDenominator);
        }

        Ok((a - b) / denominator)
    }

    fn required_bands(&self) -> &[Band] {
        &self.bands
    }
}
