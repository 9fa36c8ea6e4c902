// src/utils/scaling.rs
use crate::bands::BandSample;

/// Sentinel-2 L2A surface reflectance scale: DN / 10000 = reflectance.
pub const DEFAULT_DN_SCALE: f64 = 10000.0;

/// Convert raw digital numbers to reflectance fractions.
///
/// Bitmask bands (QA60) are carried through untouched; scaling them would
/// destroy the flag bits.
pub fn dn_to_reflectance(sample: &BandSample, scale: f64) -> BandSample {
    sample
        .iter()
        .map(|(band, value)| {
            if band.is_reflectance() {
                (band, value / scale)
            } else {
                (band, value)
            }
        })
        .collect()
}
