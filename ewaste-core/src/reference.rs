//! Reference data sources: the built-in national figures and reference files on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::catalog::{DeviceCatalog, DeviceSpec, NationalBenchmark, ReferenceData};
use crate::model::Device;
use crate::ports::{ReferenceError, ReferenceSource};

/// Global E-Waste Monitor 2023: 3.2 million tonnes.
const INDIA_TOTAL_EWASTE_KG: u64 = 3_200_000_000;
const INDIA_POPULATION: u64 = 1_400_000_000;

/// Reference data compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReference;

impl BuiltinReference {
    fn specs() -> Vec<DeviceSpec> {
        vec![
            DeviceSpec::new(Device::Smartphone, dec!(0.15), dec!(3)),
            DeviceSpec::new(Device::Laptop, dec!(1.8), dec!(5)),
            DeviceSpec::new(Device::Tv, dec!(10.0), dec!(8)),
            DeviceSpec::new(Device::Charger, dec!(0.05), dec!(2)),
        ]
    }
}

impl ReferenceSource for BuiltinReference {
    fn describe(&self) -> String {
        "built-in reference data".to_owned()
    }

    fn load(&self) -> Result<ReferenceData, ReferenceError> {
        let catalog = DeviceCatalog::new(Self::specs())?;
        let benchmark = NationalBenchmark::new(
            Decimal::from(INDIA_TOTAL_EWASTE_KG),
            Decimal::from(INDIA_POPULATION),
            dec!(2.5),
        )?;
        Ok(ReferenceData::new(catalog, benchmark))
    }
}

/// Reference data read from a TOML, JSON, or YAML file.
///
/// The format follows the file extension. Expected layout:
///
/// ```toml
/// [weights_kg]
/// smartphone = 0.15
/// laptop = 1.8
/// tv = 10.0
/// charger = 0.05
///
/// [lifetimes_years]
/// smartphone = 3
/// laptop = 5
/// tv = 8
/// charger = 2
///
/// [benchmark]
/// total_mass_kg = 3.2e9
/// population = 1.4e9
/// average_individual_kg = 2.5
/// ```
#[derive(Debug, Clone)]
pub struct FileReference {
    path: PathBuf,
}

impl FileReference {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the reference file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReferenceSource for FileReference {
    fn describe(&self) -> String {
        format!("reference file {}", self.path.display())
    }

    fn load(&self) -> Result<ReferenceData, ReferenceError> {
        let raw: RawReference = Config::builder()
            .add_source(File::from(self.path.as_path()))
            .build()?
            .try_deserialize()?;
        raw.validate()
    }
}

/// On-disk shape of a reference file, before validation.
#[derive(Debug, Deserialize)]
struct RawReference {
    weights_kg: HashMap<String, f64>,
    lifetimes_years: HashMap<String, f64>,
    benchmark: RawBenchmark,
}

#[derive(Debug, Deserialize)]
struct RawBenchmark {
    total_mass_kg: f64,
    population: f64,
    average_individual_kg: f64,
}

impl RawReference {
    fn validate(self) -> Result<ReferenceData, ReferenceError> {
        let weights = device_table(self.weights_kg, "weights_kg")?;
        let mut lifetimes = device_table(self.lifetimes_years, "lifetimes_years")?;

        let mut specs = Vec::with_capacity(weights.len());
        for (device, weight_kg) in weights {
            let lifetime_years =
                lifetimes
                    .remove(&device)
                    .ok_or(ReferenceError::MissingDevice {
                        table: "lifetimes_years",
                        device,
                    })?;
            specs.push(DeviceSpec::new(device, weight_kg, lifetime_years));
        }
        for device in Device::ALL {
            if !specs.iter().any(|spec| spec.device == device) {
                return Err(ReferenceError::MissingDevice {
                    table: "weights_kg",
                    device,
                });
            }
        }
        let catalog = DeviceCatalog::new(specs)?;

        let benchmark = NationalBenchmark::new(
            to_decimal(self.benchmark.total_mass_kg, "benchmark.total_mass_kg")?,
            to_decimal(self.benchmark.population, "benchmark.population")?,
            to_decimal(
                self.benchmark.average_individual_kg,
                "benchmark.average_individual_kg",
            )?,
        )?;

        Ok(ReferenceData::new(catalog, benchmark))
    }
}

fn device_table(
    raw: HashMap<String, f64>,
    table: &str,
) -> Result<HashMap<Device, Decimal>, ReferenceError> {
    raw.into_iter()
        .map(|(slug, value)| {
            let device = Device::from_slug(&slug).ok_or(ReferenceError::UnknownDevice(slug))?;
            let value = to_decimal(value, &format!("{table}.{device}"))?;
            Ok((device, value))
        })
        .collect()
}

fn to_decimal(value: f64, field: &str) -> Result<Decimal, ReferenceError> {
    Decimal::from_f64(value).ok_or_else(|| ReferenceError::InvalidNumber(field.to_owned()))
}
