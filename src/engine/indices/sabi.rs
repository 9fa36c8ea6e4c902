// src/engine/indices/sabi.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined, EPSILON};

/// Surface Algal Bloom Index: (NIR - Red) / (Blue + Green).
///
/// Water sits around [-0.1, 0]; microalgae push the value to -0.2 and below.
pub struct Sabi;

const BANDS: [Band; 4] = [Band::Nir, Band::Red, Band::Blue, Band::Green];

impl SpectralIndex for Sabi {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let nir = require(sample, Band::Nir)?;
        let red = require(sample, Band::Red)?;
        let blue = require(sample, Band::Blue)?;
        let green = require(sample, Band::Green)?;

        let denominator = blue + green;
        if denominator.abs() < EPSILON {
            return Err(Undefined::DegenerateDenominator);
        }

        Ok((nir - red) / denominator)
    }

    fn required_bands(&self) -> &[Band] {
        &BANDS
    }
}
