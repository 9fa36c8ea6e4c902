// src/lib.rs
pub mod bands;
pub mod batch;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod io;
pub mod series;
pub mod stats;
pub mod utils;

pub use bands::{Band, BandSample};
pub use catalog::{catalog, IndexCatalog, IndexDefinition, IndexId};
pub use engine::{compute, IndexResult, IndexValue, Undefined};

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
