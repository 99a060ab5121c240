//! Scenario and ordering tests for the household e-waste estimator.

use ewaste_core::estimator::{breakdown, estimate};
use ewaste_core::{
    BuiltinReference, Comparison, DisposalAction, EwasteService, NationalBenchmark, ReferenceData,
    ReferenceSource, SurveyInput, UpgradeFrequency,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference() -> ReferenceData {
    BuiltinReference.load().expect("built-in reference data is valid")
}

fn personal(input: &SurveyInput) -> Decimal {
    let data = reference();
    estimate(input, &data.catalog, &data.benchmark).personal
}

fn laptop_and_tv() -> SurveyInput {
    SurveyInput {
        laptops_in_use: 1,
        tvs_in_use: 1,
        ..SurveyInput::default()
    }
}

#[test]
fn empty_survey_yields_zero() {
    let result = {
        let data = reference();
        estimate(&SurveyInput::default(), &data.catalog, &data.benchmark)
    };
    assert_eq!(result.personal, Decimal::ZERO);
    assert_eq!(result.contribution_percent, Decimal::ZERO);
    assert_eq!(result.comparison, Comparison::Below);
}

#[test]
fn idle_phones_and_chargers_count_at_full_mass() {
    let input = SurveyInput {
        phones_in_drawer: 2,
        unused_chargers: 3,
        ..SurveyInput::default()
    };
    assert_eq!(personal(&input), dec!(0.45));
}

#[test]
fn devices_in_use_are_amortized_over_lifetime() {
    let data = reference();
    let result = estimate(&laptop_and_tv(), &data.catalog, &data.benchmark);
    assert_eq!(result.personal, dec!(1.61));
    assert_eq!(result.per_capita, dec!(2.29));
    assert_eq!(result.average_individual, dec!(2.5));
    assert_eq!(result.contribution_percent, dec!(70.44));
    assert_eq!(result.comparison, Comparison::Below);
}

#[test]
fn giving_away_halves_and_rounds_midpoint_up() {
    let input = SurveyInput {
        disposal: DisposalAction::Give,
        ..laptop_and_tv()
    };
    let data = reference();
    let parts = breakdown(&input, &data.catalog);
    assert_eq!(parts.total_kg(), dec!(0.805));

    let result = estimate(&input, &data.catalog, &data.benchmark);
    assert_eq!(result.personal, dec!(0.81));
    assert_eq!(result.contribution_percent, dec!(35.22));
}

#[test]
fn yearly_upgrades_add_one_smartphone() {
    let input = SurveyInput {
        upgrade_frequency: UpgradeFrequency::Yearly,
        ..SurveyInput::default()
    };
    assert_eq!(personal(&input), dec!(0.15));

    let input = SurveyInput {
        upgrade_frequency: UpgradeFrequency::TwoYears,
        ..SurveyInput::default()
    };
    assert_eq!(personal(&input), dec!(0.08));
}

#[test]
fn unknown_codes_behave_like_defaults() {
    let baseline = personal(&laptop_and_tv());
    let input = SurveyInput {
        upgrade_frequency: UpgradeFrequency::from_code("weekly"),
        disposal: DisposalAction::from_code("landfill"),
        ..laptop_and_tv()
    };
    assert_eq!(personal(&input), baseline);
}

#[test]
fn disposal_methods_are_ordered() {
    let base = SurveyInput {
        phones_in_drawer: 3,
        laptops_in_use: 2,
        tvs_in_use: 1,
        unused_chargers: 4,
        upgrade_frequency: UpgradeFrequency::TwoYears,
        ..SurveyInput::default()
    };
    let with = |disposal| personal(&SurveyInput { disposal, ..base });

    let give = with(DisposalAction::Give);
    let sell = with(DisposalAction::Sell);
    let recycle = with(DisposalAction::Recycle);
    let keep = with(DisposalAction::Keep);
    assert!(give <= sell, "give {give} > sell {sell}");
    assert!(sell <= recycle, "sell {sell} > recycle {recycle}");
    assert!(recycle <= keep, "recycle {recycle} > keep {keep}");
}

#[test]
fn upgrade_frequencies_are_ordered() {
    for disposal in DisposalAction::ALL {
        let with = |upgrade_frequency| {
            personal(&SurveyInput {
                phones_in_drawer: 1,
                laptops_in_use: 1,
                upgrade_frequency,
                disposal,
                ..SurveyInput::default()
            })
        };
        let yearly = with(UpgradeFrequency::Yearly);
        let two_years = with(UpgradeFrequency::TwoYears);
        let three_plus = with(UpgradeFrequency::ThreePlus);
        assert!(yearly >= two_years, "{disposal:?}: yearly {yearly} < two years {two_years}");
        assert!(
            two_years >= three_plus,
            "{disposal:?}: two years {two_years} < three plus {three_plus}"
        );
    }
}

#[test]
fn every_count_is_monotone() {
    let data = reference();
    let bumps: [fn(&mut SurveyInput); 4] = [
        |input| input.phones_in_drawer += 1,
        |input| input.laptops_in_use += 1,
        |input| input.tvs_in_use += 1,
        |input| input.unused_chargers += 1,
    ];

    for disposal in DisposalAction::ALL {
        for start in 0..5 {
            let base = SurveyInput {
                phones_in_drawer: start,
                laptops_in_use: start,
                tvs_in_use: start,
                unused_chargers: start,
                disposal,
                ..SurveyInput::default()
            };
            let before = breakdown(&base, &data.catalog).total_kg();
            assert!(before >= Decimal::ZERO, "negative estimate for {base:?}");
            for bump in bumps {
                let mut bumped = base;
                bump(&mut bumped);
                let after = breakdown(&bumped, &data.catalog).total_kg();
                assert!(after >= before, "{bumped:?} lowered the estimate");
            }
        }
    }
}

#[test]
fn matching_the_per_capita_figure_compares_equal() {
    let data = reference();
    let benchmark = NationalBenchmark::new(Decimal::from(1_400_u32), Decimal::from(700_u32), dec!(2.5))
        .expect("valid benchmark");
    let input = SurveyInput {
        unused_chargers: 40,
        ..SurveyInput::default()
    };
    let result = estimate(&input, &data.catalog, &benchmark);
    assert_eq!(result.personal, dec!(2));
    assert_eq!(result.per_capita, dec!(2));
    assert_eq!(result.contribution_percent, dec!(100));
    assert_eq!(result.comparison, Comparison::Equal);

    let one_more = SurveyInput {
        unused_chargers: 41,
        ..input
    };
    assert_eq!(
        estimate(&one_more, &data.catalog, &benchmark).comparison,
        Comparison::Above
    );
}

#[test]
fn large_counts_do_not_overflow() {
    let input = SurveyInput {
        phones_in_drawer: u32::MAX,
        laptops_in_use: u32::MAX,
        tvs_in_use: u32::MAX,
        unused_chargers: u32::MAX,
        upgrade_frequency: UpgradeFrequency::Yearly,
        disposal: DisposalAction::Keep,
    };
    let data = reference();
    let result = estimate(&input, &data.catalog, &data.benchmark);
    assert!(result.personal > Decimal::ZERO);
    assert_eq!(result.comparison, Comparison::Above);
}

#[test]
fn service_is_deterministic_and_shared() {
    let service = EwasteService::from_source(&BuiltinReference).expect("service builds");
    let clone = service.clone();
    let input = SurveyInput {
        phones_in_drawer: 4,
        tvs_in_use: 2,
        upgrade_frequency: UpgradeFrequency::Yearly,
        disposal: DisposalAction::Sell,
        ..SurveyInput::default()
    };
    assert_eq!(service.estimate(&input), clone.estimate(&input));
    assert_eq!(service.report(&input), service.report(&input));
    assert_eq!(service.report(&input).result, service.estimate(&input));
}

fn assert_close(value: &serde_json::Value, expected: f64) {
    let actual = value.as_f64().expect("number");
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn result_serializes_with_form_names() {
    let service = EwasteService::from_source(&BuiltinReference).expect("service builds");
    let json = serde_json::to_value(service.estimate(&laptop_and_tv())).expect("serializes");
    assert_close(&json["personal"], 1.61);
    assert_close(&json["india_per_capita"], 2.29);
    assert_close(&json["average_indian"], 2.5);
    assert_close(&json["contribution_percent"], 70.44);
    assert_eq!(json["comparison"], serde_json::json!("below"));
}
