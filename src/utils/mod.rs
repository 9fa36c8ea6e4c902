// src/utils/mod.rs
pub mod cache;
pub mod scaling;

pub use cache::SeriesCache;
