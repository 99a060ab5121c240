//! Traits describing where reference data comes from, and the errors loading it can raise.

use config::ConfigError;

use crate::catalog::ReferenceData;
use crate::model::Device;

#[derive(thiserror::Error, Debug)]
/// Errors raised while loading or validating reference data.
pub enum ReferenceError {
    /// The reference file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// A category has no weight or no lifetime entry.
    #[error("Missing {table} entry for {device}")]
    MissingDevice {
        /// Table the entry is missing from.
        table: &'static str,
        /// Category without an entry.
        device: Device,
    },
    /// A category appears more than once.
    #[error("Duplicate entry for {0}")]
    DuplicateDevice(Device),
    /// The reference file names a category the catalog does not know.
    #[error("Unknown device: {0}")]
    UnknownDevice(String),
    /// A value is NaN, infinite, or out of decimal range.
    #[error("Invalid number for {0}")]
    InvalidNumber(String),
    /// A figure derived from the reference data does not fit the decimal range.
    #[error("{0} exceeds the computable range")]
    OutOfRange(String),
    /// Device weights must not be negative.
    #[error("Negative weight for {0}")]
    NegativeWeight(Device),
    /// Lifetimes are divisors and must be strictly positive.
    #[error("Non-positive lifetime for {0}")]
    NonPositiveLifetime(Device),
    /// Population is a divisor and must be strictly positive.
    #[error("Population must be positive")]
    NonPositivePopulation,
    /// The per-capita benchmark is a divisor and must be strictly positive.
    #[error("National e-waste total must be positive")]
    NonPositiveTotal,
    /// The average-individual display figure must not be negative.
    #[error("Average individual waste must not be negative")]
    NegativeAverage,
}

/// Source of the device catalog and national benchmark, consulted once at startup.
pub trait ReferenceSource {
    /// Short description used in log lines.
    fn describe(&self) -> String;

    /// Load and validate the reference tables.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] when the data cannot be read or fails validation.
    fn load(&self) -> Result<ReferenceData, ReferenceError>;
}
