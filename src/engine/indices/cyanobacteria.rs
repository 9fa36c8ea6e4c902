// src/engine/indices/cyanobacteria.rs
use crate::bands::{Band, BandSample};
use crate::engine::{require, SpectralIndex, Undefined, EPSILON};

/// Cyanobacteria density: 115530.31 * (Green * Red / Blue) ^ 2.38.
///
/// Result in 10^3 cell/ml. Atmospheric correction can push a band below
/// zero; a non-positive ratio under the fractional exponent is reported
/// undefined instead of letting powf produce NaN.
pub struct Cyanobacteria;

const SCALE: f64 = 115530.31;
const EXPONENT: f64 = 2.38;

const BANDS: [Band; 3] = [Band::Green, Band::Red, Band::Blue];

impl SpectralIndex for Cyanobacteria {
    fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        let green = require(sample, Band::Green)?;
        let red = require(sample, Band::Red)?;
        let blue = require(sample, Band::Blue)?;

        if blue.abs() < EPSILON {
            return Err(Undefined::DegenerateDenominator);
        }

        let ratio = green * red / blue;
        if ratio <= 0.0 {
            return Err(Undefined::NonPositivePower);
        }

        Ok(SCALE * ratio.powf(EXPONENT))
    }

    fn required_bands(&self) -> &[Band] {
        &BANDS
    }
}
