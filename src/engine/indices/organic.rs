// src/engine/indices/organic.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined, EPSILON};

/// Exponential band-ratio calculator: scale * exp(coefficient * Green / Red).
///
/// Covers the two dissolved organic matter retrievals:
/// CDOM = 537 * exp(-2.93 * Green / Red) and
/// DOC  = 432 * exp(-2.24 * Green / Red), both in mg/l.
pub struct ExponentialRatio {
    scale: f64,
    coefficient: f64,
}

const BANDS: [Band; 2] = [Band::Green, Band::Red];

impl ExponentialRatio {
    pub fn new(scale: f64, coefficient: f64) -> Self {
        Self { scale, coefficient }
    }

    pub fn cdom() -> Self {
        Self::new(537.0, -2.93)
    }

    pub fn doc() -> Self {
        Self::new(432.0, -2.24)
    }
}

impl SpectralIndex for ExponentialRatio {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let green = require(sample, Band::Green)?;
        let red = require(sample, Band::Red)?;

        if red.abs() < EPSILON {
            return Err(Undefined::DegenerateDenominator);
        }

        Ok(self.scale * (self.coefficient * green / red).exp())
    }

    fn required_bands(&self) -> &[Band] {
        &BANDS
    }
}
