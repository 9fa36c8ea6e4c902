// src/catalog/mod.rs
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::bands::{Band, BandSample};
use crate::engine::indices::{
    Awei, ChlorophyllGreen, Cyanobacteria, ExponentialRatio, NormalizedDifference, Sabi,
};
use crate::engine::{SpectralIndex, Undefined};

/// Identifiers of the catalog indices, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexId {
    #[serde(rename = "NDWI", alias = "ndwi")]
    Ndwi,
    #[serde(rename = "NDVI", alias = "ndvi")]
    Ndvi,
    #[serde(rename = "NDSI", alias = "ndsi")]
    Ndsi,
    #[serde(rename = "SABI", alias = "sabi")]
    Sabi,
    #[serde(rename = "CGI", alias = "cgi")]
    Cgi,
    #[serde(rename = "CDOM", alias = "cdom")]
    Cdom,
    #[serde(rename = "DOC", alias = "doc")]
    Doc,
    #[serde(rename = "Cyanobacteria", alias = "cyanobacteria")]
    Cyanobacteria,
    #[serde(rename = "Turbidity", alias = "turbidity")]
    Turbidity,
    #[serde(rename = "AWEI", alias = "awei")]
    Awei,
}

impl IndexId {
    pub const ALL: [IndexId; 10] = [
        IndexId::Ndwi,
        IndexId::Ndvi,
        IndexId::Ndsi,
        IndexId::Sabi,
        IndexId::Cgi,
        IndexId::Cdom,
        IndexId::Doc,
        IndexId::Cyanobacteria,
        IndexId::Turbidity,
        IndexId::Awei,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndexId::Ndwi => "NDWI",
            IndexId::Ndvi => "NDVI",
            IndexId::Ndsi => "NDSI",
            IndexId::Sabi => "SABI",
            IndexId::Cgi => "CGI",
            IndexId::Cdom => "CDOM",
            IndexId::Doc => "DOC",
            IndexId::Cyanobacteria => "Cyanobacteria",
            IndexId::Turbidity => "Turbidity",
            IndexId::Awei => "AWEI",
        }
    }

    /// Parse a user-supplied name, case-insensitively. Unknown names yield
    /// `None` so callers can drop them silently.
    pub fn parse(name: &str) -> Option<IndexId> {
        IndexId::ALL
            .into_iter()
            .find(|id| name.eq_ignore_ascii_case(id.name()))
    }
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexId {
    type Err = UnknownIndex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexId::parse(s).ok_or_else(|| UnknownIndex(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIndex(pub String);

impl fmt::Display for UnknownIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown index name: {}", self.0)
    }
}

impl std::error::Error for UnknownIndex {}

/// A named, pure formula plus its static presentation metadata.
pub struct IndexDefinition {
    pub id: IndexId,
    pub display_name: &'static str,
    /// LaTeX-style formula string for presentation layers.
    pub formula: &'static str,
    pub description: &'static str,
    pub unit: Option<&'static str>,
    /// Suggested (min, max) for map legends and colorbars.
    pub display_range: (f64, f64),
    pub references: &'static [&'static str],
    calculator: Box<dyn SpectralIndex>,
}

impl IndexDefinition {
    pub fn evaluate(&self, sample: &BandSample) -> Result<f64, Undefined> {
        self.calculator.evaluate(sample)
    }

    pub fn required_bands(&self) -> &[Band] {
        self.calculator.required_bands()
    }
}

/// The fixed, ordered set of all index definitions. Built once at first use
/// and read-only for the lifetime of the process.
pub struct IndexCatalog {
    entries: Vec<IndexDefinition>,
}

impl IndexCatalog {
    pub fn standard() -> Self {
        let entries = vec![
            IndexDefinition {
                id: IndexId::Ndwi,
                display_name: "Normalized Difference Water Index",
                formula: r"NDWI = \frac{Green - NIR}{Green + NIR} = \frac{B3 - B8}{B3 + B8}",
                description: "Delineates open water by contrasting the green band \
                              against the near infrared, where water absorbs strongly.",
                unit: None,
                display_range: (-1.0, 1.0),
                references: &["McFeeters 1996, Int. J. Remote Sensing 17(7), 1425-1432."],
                calculator: Box::new(NormalizedDifference::new(Band::Green, Band::Nir)),
            },
            IndexDefinition {
                id: IndexId::Ndvi,
                display_name: "Normalized Difference Vegetation Index",
                formula: r"NDVI = \frac{NIR - Red}{NIR + Red} = \frac{B8 - B4}{B8 + B4}",
                description: "Standard greenness measure; over water it stays negative \
                              and rises with floating vegetation.",
                unit: None,
                display_range: (-1.0, 1.0),
                references: &["Rouse et al. 1974, NASA SP-351, 309-317."],
                calculator: Box::new(NormalizedDifference::new(Band::Nir, Band::Red)),
            },
            IndexDefinition {
                id: IndexId::Ndsi,
                display_name: "Normalized Difference Snow Index",
                formula: r"NDSI = \frac{SWIR_{1600} - SWIR_{2200}}{SWIR_{1600} + SWIR_{2200}} = \frac{B11 - B12}{B11 + B12}",
                description: "Shortwave-infrared contrast used to screen snow and ice \
                              cover along the basin.",
                unit: None,
                display_range: (-1.0, 1.0),
                references: &["Hall et al. 1995, Remote Sensing of Environment 54, 127-140."],
                calculator: Box::new(NormalizedDifference::new(Band::Swir1600, Band::Swir2200)),
            },
            IndexDefinition {
                id: IndexId::Sabi,
                display_name: "Surface Algal Bloom Index",
                formula: r"SABI = \frac{NIR - Red}{Blue + Green} = \frac{B8 - B4}{B2 + B3}",
                description: "Flags biomass in the water column: NIR responds to green \
                              plants, blue to clear water, green to algal blooms. Water \
                              sits around -0.1 to 0; microalgae fall to -0.2 and below.",
                unit: None,
                display_range: (-1.0, 1.0),
                references: &[
                    "Alawadi 2010, SPIE 7825, 782506. doi:10.1117/12.862096.",
                    "Caballero et al. 2020, Sci Rep 10, 8743. doi:10.1038/s41598-020-65600-1.",
                    "Kulawiak 2016, BALTICA 29(1), 3-18. doi:10.5200/baltica.2016.29.02.",
                ],
                calculator: Box::new(Sabi),
            },
            IndexDefinition {
                id: IndexId::Cgi,
                display_name: "Chlorophyll Green Index",
                formula: r"CGI = \frac{SWIR_{945}}{Green} - 1 = \frac{B9}{B3} - 1",
                description: "Chlorophyll index variant using the 945nm water vapour \
                              band against green to estimate total chlorophyll.",
                unit: None,
                display_range: (1.0, 5.0),
                references: &[],
                calculator: Box::new(ChlorophyllGreen),
            },
            IndexDefinition {
                id: IndexId::Cdom,
                display_name: "Colored Dissolved Organic Matter",
                formula: r"CDOM = 537 \cdot \exp\left(-2.93 \cdot \frac{Green}{Red}\right)",
                description: "Optically active organic matter, both produced in the \
                              water body (phytoplankton) and washed in from the \
                              surrounding soil; correlates with methylmercury content \
                              in rivers.",
                unit: Some("mg/l"),
                display_range: (5.0, 50.0),
                references: &[
                    "Fichot et al. 2016, Environ. Sci. Technol. 50. doi:10.1021/acs.est.5b03518.",
                ],
                calculator: Box::new(ExponentialRatio::cdom()),
            },
            IndexDefinition {
                id: IndexId::Doc,
                display_name: "Dissolved Organic Carbon",
                formula: r"DOC = 432 \cdot \exp\left(-2.24 \cdot \frac{Green}{Red}\right)",
                description: "Dissolved organic carbon compounds; elevated levels \
                              indicate pollution and potential for undesirable \
                              biological growth. Fresh waters typically range from \
                              0.1 to 10-20 mg/l.",
                unit: Some("mg/l"),
                display_range: (10.0, 70.0),
                references: &[
                    "Volk et al. 2002, J. Environ. Monitoring 4, 43-47. doi:10.1039/B107768F.",
                ],
                calculator: Box::new(ExponentialRatio::doc()),
            },
            IndexDefinition {
                id: IndexId::Cyanobacteria,
                display_name: "Cyanobacteria",
                formula: r"Cyanobacteria = 115530.31 \cdot \left(\frac{Green \cdot Red}{Blue}\right)^{2.38}",
                description: "Cyanobacterial bloom density, transformed for Sentinel-2 \
                              from the Alqueva reservoir algorithms. Blooms can produce \
                              hepatotoxic peptides hazardous to humans and animals.",
                unit: Some("10^3 cell/ml"),
                display_range: (100.0, 1000.0),
                references: &[
                    "Potes et al. 2011, Int. J. Remote Sensing 32(12), 3373-3388.",
                    "Potes et al. 2012, Hydrol. Earth Syst. Sci. 16(6), 1623-1633.",
                    "Hannson et al. 2007, Freshwater Biology 52(7), 1290-1301.",
                ],
                calculator: Box::new(Cyanobacteria),
            },
            IndexDefinition {
                id: IndexId::Turbidity,
                display_name: "Turbidity",
                formula: r"Turbidity = \frac{Red - Green}{Red + Green} = \frac{B4 - B3}{B4 + B3}",
                description: "Reduction in water clarity from suspended matter \
                              absorbing or scattering light; affects light available \
                              for photosynthesis at depth.",
                unit: Some("NTU"),
                display_range: (-1.0, 1.0),
                references: &[
                    "Izagirre et al. 2009, Sci. Total Environ. 407(21), 5694-5700.",
                    "Potes et al. 2011, Int. J. Remote Sensing 32(12), 3373-3388.",
                    "Potes et al. 2012, Hydrol. Earth Syst. Sci. 16(6), 1623-1633.",
                ],
                calculator: Box::new(NormalizedDifference::new(Band::Red, Band::Green)),
            },
            IndexDefinition {
                id: IndexId::Awei,
                display_name: "Automated Water Extraction Index",
                formula: r"AWEI = 4 \cdot (Green - SWIR_{1600}) - (0.25 \cdot NIR + 2.75 \cdot SWIR_{2200})",
                description: "Weighted band sum that separates water from dark \
                              non-water surfaces; unlike the normalized-difference \
                              indices its range is unbounded.",
                unit: None,
                display_range: (-1.0, 1.0),
                references: &[
                    "Feyisa et al. 2014, Remote Sensing of Environment 140, 23-35.",
                ],
                calculator: Box::new(Awei),
            },
        ];

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexDefinition> {
        self.entries.iter()
    }

    pub fn get(&self, id: IndexId) -> Option<&IndexDefinition> {
        self.entries.iter().find(|def| def.id == id)
    }

    pub fn ids(&self) -> Vec<IndexId> {
        self.entries.iter().map(|def| def.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve user-supplied names to ids, dropping unknown names silently
    /// and keeping catalog order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<IndexId> {
        self.entries
            .iter()
            .map(|def| def.id)
            .filter(|id| {
                names
                    .iter()
                    .any(|name| name.as_ref().eq_ignore_ascii_case(id.name()))
            })
            .collect()
    }
}

/// The process-wide catalog instance.
pub fn catalog() -> &'static IndexCatalog {
    static CATALOG: OnceLock<IndexCatalog> = OnceLock::new();
    CATALOG.get_or_init(IndexCatalog::standard)
}
