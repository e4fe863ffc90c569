//! Row-indexed CSV persistence of the normalized tables

pub mod writer;

pub use writer::{write_buses, write_lines, write_transformers};
