//! Deterministic YAML fixture generation for the parser benchmarks.
//!
//! Each fixture shape is produced by a pure text generator; the engine writes
//! the selected fixtures into an output directory and reports what it wrote.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::FixtureEngine;
pub use errors::{GenerationError, Result};
pub use generators::{
    generate_arrays_yaml, generate_complex_yaml, generate_nested_yaml, generate_yaml_mapping,
};
pub use model::{FixtureFileReport, FixtureKind, FixtureParams, FixtureReport};
pub use output::{write_file, write_report_json};
