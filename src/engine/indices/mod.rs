// src/engine/indices/mod.rs
pub mod awei;
pub mod cgi;
pub mod cyanobacteria;
pub mod ndi;
pub mod organic;
pub mod sabi;

// Re-export indices
pub use awei::Awei;
pub use cgi::ChlorophyllGreen;
pub use cyanobacteria::Cyanobacteria;
pub use ndi::NormalizedDifference;
pub use organic::ExponentialRatio;
pub use sabi::Sabi;
