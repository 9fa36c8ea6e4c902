// src/engine/indices/cgi.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined, EPSILON};

/// Chlorophyll Green Index: (SWIR945 / Green) - 1.
pub struct ChlorophyllGreen;

const BANDS: [Band; 2] = [Band::Swir945, Band::Green];

impl SpectralIndex for ChlorophyllGreen {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let swir = require(sample, Band::Swir945)?;
        let green = require(sample, Band::Green)?;

        if green.abs() < EPSILON {
            return Err(Undefined::DegenerateDenominator);
        }

        Ok(swir / green - 1.0)
    }

    fn required_bands(&self) -> &[Band] {
        &BANDS
    }
}
