//! Annual e-waste estimate for one household survey.
//!
//! The estimate is the sum of three terms multiplied by a disposal factor:
//! idle phones and chargers at full mass, the yearly share of laptops and televisions
//! in use, and a flat surcharge for frequent phone upgrades. All arithmetic is exact
//! decimal; only the presentation figures are rounded.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::{DeviceCatalog, NationalBenchmark};
use crate::model::{Comparison, Device, EstimateReport, EstimateResult, SurveyInput, WasteBreakdown};

/// Number of decimal places shown to the user.
pub const DISPLAY_DECIMALS: u32 = 2;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Round a figure for display, with midpoints rounded away from zero.
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Split a survey into its contributing terms.
///
/// Terms saturate at [`Decimal::MAX`]; a validated catalog keeps every `u32` count in range.
#[must_use]
pub fn breakdown(input: &SurveyInput, catalog: &DeviceCatalog) -> WasteBreakdown {
    let count = |value: u32, per_unit_kg: Decimal| Decimal::from(value).saturating_mul(per_unit_kg);

    let unused_kg = count(input.phones_in_drawer, catalog.weight_kg(Device::Smartphone))
        .saturating_add(count(input.unused_chargers, catalog.weight_kg(Device::Charger)));

    let active_kg = count(
        input.laptops_in_use,
        catalog.spec(Device::Laptop).yearly_share_kg(),
    )
    .saturating_add(count(
        input.tvs_in_use,
        catalog.spec(Device::Tv).yearly_share_kg(),
    ));

    let upgrade_kg = catalog
        .weight_kg(Device::Smartphone)
        .saturating_mul(input.upgrade_frequency.smartphone_share());

    WasteBreakdown {
        unused_kg,
        active_kg,
        upgrade_kg,
        disposal_factor: input.disposal.waste_factor(),
    }
}

/// Estimate a household's annual e-waste and compare it to the national benchmark.
#[must_use]
pub fn estimate(
    input: &SurveyInput,
    catalog: &DeviceCatalog,
    benchmark: &NationalBenchmark,
) -> EstimateResult {
    report(input, catalog, benchmark).result
}

/// Like [`estimate`], but keeps the contributing terms.
#[must_use]
pub fn report(
    input: &SurveyInput,
    catalog: &DeviceCatalog,
    benchmark: &NationalBenchmark,
) -> EstimateReport {
    let breakdown = breakdown(input, catalog);
    let personal = breakdown.total_kg();
    let per_capita = benchmark.per_capita_kg();

    let comparison = match personal.cmp(&per_capita) {
        Ordering::Less => Comparison::Below,
        Ordering::Equal => Comparison::Equal,
        Ordering::Greater => Comparison::Above,
    };

    let result = EstimateResult {
        personal: round_for_display(personal),
        per_capita: round_for_display(per_capita),
        average_individual: benchmark.average_individual_kg(),
        contribution_percent: round_for_display(contribution_percent(personal, benchmark)),
        comparison,
    };

    EstimateReport { result, breakdown }
}

/// `personal / (total / population) * 100`, evaluated as
/// `personal * population * 100 / total` so no repeating per-capita quotient is involved.
fn contribution_percent(personal: Decimal, benchmark: &NationalBenchmark) -> Decimal {
    personal
        .checked_mul(benchmark.population())
        .and_then(|scaled| scaled.checked_mul(PERCENT))
        .and_then(|scaled| scaled.checked_div(benchmark.total_mass_kg()))
        .or_else(|| {
            personal
                .checked_div(benchmark.per_capita_kg())
                .and_then(|ratio| ratio.checked_mul(PERCENT))
        })
        // saturates on overflow
        .unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display_rounding_moves_midpoints_away_from_zero() {
        assert_eq!(round_for_display(dec!(0.805)), dec!(0.81));
        assert_eq!(round_for_display(dec!(0.815)), dec!(0.82));
        assert_eq!(round_for_display(dec!(0.8049)), dec!(0.80));
        assert_eq!(round_for_display(dec!(70.4375)), dec!(70.44));
        assert_eq!(round_for_display(dec!(-0.805)), dec!(-0.81));
    }

    #[test]
    fn display_rounding_keeps_short_values() {
        assert_eq!(round_for_display(dec!(0.45)), dec!(0.45));
        assert_eq!(round_for_display(Decimal::ZERO), Decimal::ZERO);
    }
}
