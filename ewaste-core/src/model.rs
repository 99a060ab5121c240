//! Domain data structures for devices, survey answers, and estimate results.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Device categories tracked by the catalog.
pub enum Device {
    /// Mobile phone.
    Smartphone,
    /// Laptop computer.
    Laptop,
    /// Television set.
    Tv,
    /// Power adapter or charging brick.
    Charger,
}

impl Device {
    /// Every category, in catalog order.
    pub const ALL: [Self; 4] = [Self::Smartphone, Self::Laptop, Self::Tv, Self::Charger];

    /// Stable lowercase identifier used in reference files and on the wire.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Smartphone => "smartphone",
            Self::Laptop => "laptop",
            Self::Tv => "tv",
            Self::Charger => "charger",
        }
    }

    /// Resolve a category from its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|device| device.slug() == slug)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
/// How often the household replaces its phones.
///
/// Unrecognized codes fall back to [`UpgradeFrequency::ThreePlus`], which adds nothing.
pub enum UpgradeFrequency {
    /// A new phone every year.
    Yearly,
    /// A new phone every two years.
    TwoYears,
    /// Three years or longer.
    #[default]
    ThreePlus,
}

impl UpgradeFrequency {
    /// Every option, most frequent first.
    pub const ALL: [Self; 3] = [Self::Yearly, Self::TwoYears, Self::ThreePlus];

    /// Parse a form code. Never fails: anything unknown is [`UpgradeFrequency::ThreePlus`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "yearly" => Self::Yearly,
            "two_years" => Self::TwoYears,
            _ => Self::ThreePlus,
        }
    }

    /// Form code for this option.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::TwoYears => "two_years",
            Self::ThreePlus => "three_plus",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yearly => "Every year",
            Self::TwoYears => "Every two years",
            Self::ThreePlus => "Every three years or longer",
        }
    }

    /// Share of one smartphone added to the yearly total.
    #[must_use]
    pub fn smartphone_share(self) -> Decimal {
        match self {
            Self::Yearly => Decimal::ONE,
            Self::TwoYears => dec!(0.5),
            Self::ThreePlus => Decimal::ZERO,
        }
    }
}

impl From<String> for UpgradeFrequency {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
/// What the household does with devices it retires.
///
/// Unrecognized codes fall back to [`DisposalAction::Keep`], which avoids nothing.
pub enum DisposalAction {
    /// Retired devices stay in the household.
    #[default]
    Keep,
    /// Sold on for reuse.
    Sell,
    /// Given away for reuse.
    Give,
    /// Handed to a recycler.
    Recycle,
}

impl DisposalAction {
    /// Every option, in form order.
    pub const ALL: [Self; 4] = [Self::Keep, Self::Sell, Self::Give, Self::Recycle];

    /// Parse a form code. Never fails: anything unknown is [`DisposalAction::Keep`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "sell" => Self::Sell,
            "give" => Self::Give,
            "recycle" => Self::Recycle,
            _ => Self::Keep,
        }
    }

    /// Form code for this option.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Sell => "sell",
            Self::Give => "give",
            Self::Recycle => "recycle",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Keep => "Keep them",
            Self::Sell => "Sell them",
            Self::Give => "Give them away",
            Self::Recycle => "Recycle them",
        }
    }

    /// Fraction of the gross waste that still ends up as waste.
    #[must_use]
    pub fn waste_factor(self) -> Decimal {
        match self {
            Self::Keep => Decimal::ONE,
            Self::Sell => dec!(0.7),
            Self::Give => dec!(0.5),
            Self::Recycle => dec!(0.9),
        }
    }
}

impl From<String> for DisposalAction {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Answers to the household survey. Missing and `null` fields take their defaults.
pub struct SurveyInput {
    /// Old phones lying unused in a drawer.
    #[serde(rename = "phones_drawer", deserialize_with = "null_as_default")]
    pub phones_in_drawer: u32,
    /// Laptops currently in use.
    #[serde(rename = "laptops_5yrs", deserialize_with = "null_as_default")]
    pub laptops_in_use: u32,
    /// Televisions currently in use.
    #[serde(rename = "tvs_use", deserialize_with = "null_as_default")]
    pub tvs_in_use: u32,
    /// Chargers nobody uses anymore.
    #[serde(rename = "chargers", deserialize_with = "null_as_default")]
    pub unused_chargers: u32,
    /// Phone upgrade cadence.
    #[serde(rename = "upgrade_freq", deserialize_with = "null_as_default")]
    pub upgrade_frequency: UpgradeFrequency,
    /// Handling of retired devices.
    #[serde(rename = "old_device_action", deserialize_with = "null_as_default")]
    pub disposal: DisposalAction,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Position of a personal estimate relative to the national per-capita figure.
pub enum Comparison {
    /// Less than the national per-capita figure.
    Below,
    /// Exactly the national per-capita figure.
    Equal,
    /// More than the national per-capita figure.
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// The four terms that make up a personal estimate, unrounded.
pub struct WasteBreakdown {
    /// Phones and chargers lying idle, counted at full mass.
    #[serde(with = "rust_decimal::serde::float")]
    pub unused_kg: Decimal,
    /// Yearly share of the laptops and televisions in use.
    #[serde(with = "rust_decimal::serde::float")]
    pub active_kg: Decimal,
    /// Flat surcharge for the phone upgrade cadence.
    #[serde(with = "rust_decimal::serde::float")]
    pub upgrade_kg: Decimal,
    /// Multiplier applied for the disposal method.
    #[serde(with = "rust_decimal::serde::float")]
    pub disposal_factor: Decimal,
}

impl WasteBreakdown {
    /// Waste before the disposal multiplier.
    #[must_use]
    pub fn gross_kg(&self) -> Decimal {
        self.unused_kg
            .saturating_add(self.active_kg)
            .saturating_add(self.upgrade_kg)
    }

    /// Waste after the disposal multiplier, at full precision.
    #[must_use]
    pub fn total_kg(&self) -> Decimal {
        self.gross_kg().saturating_mul(self.disposal_factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Figures handed to the presentation layer, rounded to two decimals.
pub struct EstimateResult {
    /// Personal annual e-waste in kg.
    #[serde(with = "rust_decimal::serde::float")]
    pub personal: Decimal,
    /// National e-waste mass divided by population, in kg.
    #[serde(rename = "india_per_capita", with = "rust_decimal::serde::float")]
    pub per_capita: Decimal,
    /// Fixed average-individual figure shown for comparison, in kg.
    #[serde(rename = "average_indian", with = "rust_decimal::serde::float")]
    pub average_individual: Decimal,
    /// Personal figure as a percentage of the per-capita figure.
    #[serde(with = "rust_decimal::serde::float")]
    pub contribution_percent: Decimal,
    /// Unrounded personal figure compared to the unrounded per-capita figure.
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Result together with the terms that produced it.
pub struct EstimateReport {
    /// Rounded presentation figures.
    pub result: EstimateResult,
    /// Unrounded contributing terms.
    pub breakdown: WasteBreakdown,
}
