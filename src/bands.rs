// src/bands.rs
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical Sentinel-2 band identifiers used by the index formulas.
///
/// SWIR bands are named by their central wavelength in nanometers
/// (B9 ~945nm, B11 ~1610nm, B12 ~2190nm). QA60 is the cloud bitmask
/// band and never holds reflectance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    #[serde(rename = "Blue", alias = "blue", alias = "B2")]
    Blue,
    #[serde(rename = "Green", alias = "green", alias = "B3")]
    Green,
    #[serde(rename = "Red", alias = "red", alias = "B4")]
    Red,
    #[serde(rename = "NIR", alias = "nir", alias = "B8")]
    Nir,
    #[serde(rename = "SWIR945", alias = "swir945", alias = "B9")]
    Swir945,
    #[serde(rename = "SWIR1600", alias = "swir1600", alias = "B11")]
    Swir1600,
    #[serde(rename = "SWIR2200", alias = "swir2200", alias = "B12")]
    Swir2200,
    #[serde(rename = "QA60", alias = "qa60")]
    Qa60,
}

impl Band {
    pub const ALL: [Band; 8] = [
        Band::Blue,
        Band::Green,
        Band::Red,
        Band::Nir,
        Band::Swir945,
        Band::Swir1600,
        Band::Swir2200,
        Band::Qa60,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Band::Blue => "Blue",
            Band::Green => "Green",
            Band::Red => "Red",
            Band::Nir => "NIR",
            Band::Swir945 => "SWIR945",
            Band::Swir1600 => "SWIR1600",
            Band::Swir2200 => "SWIR2200",
            Band::Qa60 => "QA60",
        }
    }

    /// Sentinel-2 band code as used in the imagery catalog.
    pub fn sentinel2_code(&self) -> &'static str {
        match self {
            Band::Blue => "B2",
            Band::Green => "B3",
            Band::Red => "B4",
            Band::Nir => "B8",
            Band::Swir945 => "B9",
            Band::Swir1600 => "B11",
            Band::Swir2200 => "B12",
            Band::Qa60 => "QA60",
        }
    }

    /// True for reflectance bands, false for bitmask bands.
    pub fn is_reflectance(&self) -> bool {
        !matches!(self, Band::Qa60)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Band {
    type Err = UnknownBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for band in Band::ALL {
            if s.eq_ignore_ascii_case(band.name()) || s.eq_ignore_ascii_case(band.sentinel2_code())
            {
                return Ok(band);
            }
        }
        Err(UnknownBand(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBand(pub String);

impl fmt::Display for UnknownBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown band name: {}", self.0)
    }
}

impl std::error::Error for UnknownBand {}

// QA60 cloud bits (opaque clouds and cirrus).
const QA60_OPAQUE_CLOUD: u32 = 1 << 10;
const QA60_CIRRUS: u32 = 1 << 11;

/// One pixel's (or one aggregate region's) reflectance values across bands.
///
/// A transient value object: built, evaluated, discarded. Reflectance values
/// are fractions in [0, 1]; QA60 carries the raw cloud bitmask.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandSample {
    values: BTreeMap<Band, f64>,
}

impl BandSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, band: Band, value: f64) -> Self {
        self.values.insert(band, value);
        self
    }

    pub fn set(&mut self, band: Band, value: f64) {
        self.values.insert(band, value);
    }

    pub fn get(&self, band: Band) -> Option<f64> {
        self.values.get(&band).copied()
    }

    pub fn contains(&self, band: Band) -> bool {
        self.values.contains_key(&band)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Band, f64)> + '_ {
        self.values.iter().map(|(b, v)| (*b, *v))
    }

    /// True when the QA60 bitmask flags opaque cloud or cirrus.
    /// Samples without QA60 are assumed already cloud-masked upstream.
    pub fn is_cloudy(&self) -> bool {
        match self.get(Band::Qa60) {
            Some(qa) => {
                let bits = qa as u32;
                bits & (QA60_OPAQUE_CLOUD | QA60_CIRRUS) != 0
            }
            None => false,
        }
    }
}

impl FromIterator<(Band, f64)> for BandSample {
    fn from_iter<T: IntoIterator<Item = (Band, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
