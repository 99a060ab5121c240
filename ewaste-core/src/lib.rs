//! Core types and estimator for the ewaste household e-waste calculator.

/// Validated device catalog and national benchmark.
pub mod catalog;
/// Pure annual e-waste estimate.
pub mod estimator;
/// Domain models shared by all front ends.
pub mod model;
/// Traits describing reference data sources.
pub mod ports;
/// Built-in and file-backed reference data.
pub mod reference;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use model::*;
pub use ports::*;
pub use reference::*;
pub use service::*;
