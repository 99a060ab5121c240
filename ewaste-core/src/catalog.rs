//! Validated reference tables: device catalog and national benchmark.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Device;
use crate::ports::ReferenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Unit mass and expected service life of one device category.
pub struct DeviceSpec {
    /// Category described by this entry.
    pub device: Device,
    /// Mass of a single unit in kg.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight_kg: Decimal,
    /// Expected service life in years.
    #[serde(with = "rust_decimal::serde::float")]
    pub lifetime_years: Decimal,
}

impl DeviceSpec {
    /// Create an entry for a category.
    #[must_use]
    pub fn new(device: Device, weight_kg: Decimal, lifetime_years: Decimal) -> Self {
        Self {
            device,
            weight_kg,
            lifetime_years,
        }
    }

    /// Share of the unit mass that falls due each year of service.
    ///
    /// Saturates at [`Decimal::MAX`] when the quotient is out of range.
    #[must_use]
    pub fn yearly_share_kg(&self) -> Decimal {
        self.checked_yearly_share_kg().unwrap_or(Decimal::MAX)
    }

    /// Yearly share, or `None` when the quotient does not fit.
    #[must_use]
    pub fn checked_yearly_share_kg(&self) -> Option<Decimal> {
        self.weight_kg.checked_div(self.lifetime_years)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Complete set of device entries, one per category.
pub struct DeviceCatalog {
    smartphone: DeviceSpec,
    laptop: DeviceSpec,
    tv: DeviceSpec,
    charger: DeviceSpec,
}

impl DeviceCatalog {
    /// Build a catalog from one entry per category.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] when a category is missing or repeated, a weight is
    /// negative, a lifetime is not strictly positive, or the largest possible survey
    /// would not fit the decimal range.
    pub fn new(specs: Vec<DeviceSpec>) -> Result<Self, ReferenceError> {
        let mut specs_map = HashMap::with_capacity(specs.len());
        for spec in specs {
            if spec.weight_kg < Decimal::ZERO {
                return Err(ReferenceError::NegativeWeight(spec.device));
            }
            if spec.lifetime_years <= Decimal::ZERO {
                return Err(ReferenceError::NonPositiveLifetime(spec.device));
            }
            if specs_map.insert(spec.device, spec).is_some() {
                return Err(ReferenceError::DuplicateDevice(spec.device));
            }
        }

        let mut take = |device: Device| {
            specs_map
                .remove(&device)
                .ok_or(ReferenceError::MissingDevice {
                    table: "device",
                    device,
                })
        };

        let catalog = Self {
            smartphone: take(Device::Smartphone)?,
            laptop: take(Device::Laptop)?,
            tv: take(Device::Tv)?,
            charger: take(Device::Charger)?,
        };
        catalog.check_range()?;
        Ok(catalog)
    }

    /// Gross waste of a survey answering `u32::MAX` for every count must be computable.
    /// Disposal factors never exceed 1, so every other survey stays in range too.
    fn check_range(&self) -> Result<(), ReferenceError> {
        let most = Decimal::from(u32::MAX);
        let at_most = |device: Device, per_unit_kg: Option<Decimal>| {
            per_unit_kg
                .and_then(|kg| kg.checked_mul(most))
                .ok_or_else(|| ReferenceError::OutOfRange(format!("Waste from {device}")))
        };

        let terms = [
            at_most(Device::Smartphone, Some(self.smartphone.weight_kg))?,
            at_most(Device::Charger, Some(self.charger.weight_kg))?,
            at_most(Device::Laptop, self.laptop.checked_yearly_share_kg())?,
            at_most(Device::Tv, self.tv.checked_yearly_share_kg())?,
            self.smartphone.weight_kg,
        ];
        terms
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, kg| sum.checked_add(kg))
            .map(|_gross| ())
            .ok_or_else(|| ReferenceError::OutOfRange("Household total".to_owned()))
    }

    /// Entry for a category.
    #[must_use]
    pub fn spec(&self, device: Device) -> &DeviceSpec {
        match device {
            Device::Smartphone => &self.smartphone,
            Device::Laptop => &self.laptop,
            Device::Tv => &self.tv,
            Device::Charger => &self.charger,
        }
    }

    /// Unit mass of a category in kg.
    #[must_use]
    pub fn weight_kg(&self, device: Device) -> Decimal {
        self.spec(device).weight_kg
    }

    /// Iterator over all entries in catalog order.
    pub fn specs(&self) -> impl Iterator<Item = &DeviceSpec> {
        Device::ALL.into_iter().map(|device| self.spec(device))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// National e-waste figures the personal estimate is compared against.
pub struct NationalBenchmark {
    #[serde(with = "rust_decimal::serde::float")]
    total_mass_kg: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    population: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    average_individual_kg: Decimal,
}

impl NationalBenchmark {
    /// Create a benchmark.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] when the total or population is not strictly positive,
    /// the average is negative, or the per-capita quotient does not fit.
    pub fn new(
        total_mass_kg: Decimal,
        population: Decimal,
        average_individual_kg: Decimal,
    ) -> Result<Self, ReferenceError> {
        if population <= Decimal::ZERO {
            return Err(ReferenceError::NonPositivePopulation);
        }
        if total_mass_kg <= Decimal::ZERO {
            return Err(ReferenceError::NonPositiveTotal);
        }
        if average_individual_kg < Decimal::ZERO {
            return Err(ReferenceError::NegativeAverage);
        }
        if total_mass_kg.checked_div(population).is_none() {
            return Err(ReferenceError::OutOfRange("Per-capita benchmark".to_owned()));
        }
        Ok(Self {
            total_mass_kg,
            population,
            average_individual_kg,
        })
    }

    /// National e-waste mass in kg per year.
    #[must_use]
    pub fn total_mass_kg(&self) -> Decimal {
        self.total_mass_kg
    }

    /// Population the total is shared across.
    #[must_use]
    pub fn population(&self) -> Decimal {
        self.population
    }

    /// Fixed average-individual figure shown alongside the estimate.
    #[must_use]
    pub fn average_individual_kg(&self) -> Decimal {
        self.average_individual_kg
    }

    /// Total mass divided by population, unrounded.
    #[must_use]
    pub fn per_capita_kg(&self) -> Decimal {
        self.total_mass_kg
            .checked_div(self.population)
            .unwrap_or(Decimal::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything the estimator needs besides the survey answers.
pub struct ReferenceData {
    /// Device weights and lifetimes.
    pub catalog: DeviceCatalog,
    /// National comparison figures.
    pub benchmark: NationalBenchmark,
}

impl ReferenceData {
    /// Bundle a catalog and benchmark.
    #[must_use]
    pub fn new(catalog: DeviceCatalog, benchmark: NationalBenchmark) -> Self {
        Self { catalog, benchmark }
    }
}
