// src/io/mod.rs
pub mod reader;
pub mod writer;

pub use reader::{read_sample, read_series};
pub use writer::write_json;
