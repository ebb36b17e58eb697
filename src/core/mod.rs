//! Core building blocks: crop parameters, candidate discovery and output
//! naming, and crop geometry. These are internal primitives consumed by the
//! high-level `api` module.
pub mod discovery;
pub mod params;
pub mod processing;
