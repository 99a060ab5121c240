//! Survey form fields as posted by the browser.

use std::num::IntErrorKind;

use ewaste_core::{DisposalAction, SurveyInput, UpgradeFrequency};
use serde::Deserialize;

/// Raw survey form. Every field is optional and kept as text until coerced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyForm {
    /// Old phones in a drawer.
    pub phones_drawer: Option<String>,
    /// Laptops in use.
    pub laptops_5yrs: Option<String>,
    /// Televisions in use.
    pub tvs_use: Option<String>,
    /// Unused chargers.
    pub chargers: Option<String>,
    /// Phone upgrade cadence code.
    pub upgrade_freq: Option<String>,
    /// Disposal method code.
    pub old_device_action: Option<String>,
}

impl SurveyForm {
    /// Coerce the form into survey answers.
    ///
    /// Missing or blank counts become 0. Counts that are not whole numbers become 0,
    /// negative counts are clamped to 0 and counts above `u32::MAX` are clamped to it;
    /// all of these are logged. Unknown codes take the default
    /// option.
    #[must_use]
    pub fn into_input(self) -> SurveyInput {
        SurveyInput {
            phones_in_drawer: count("phones_drawer", self.phones_drawer.as_deref()),
            laptops_in_use: count("laptops_5yrs", self.laptops_5yrs.as_deref()),
            tvs_in_use: count("tvs_use", self.tvs_use.as_deref()),
            unused_chargers: count("chargers", self.chargers.as_deref()),
            upgrade_frequency: self
                .upgrade_freq
                .as_deref()
                .map(UpgradeFrequency::from_code)
                .unwrap_or_default(),
            disposal: self
                .old_device_action
                .as_deref()
                .map(DisposalAction::from_code)
                .unwrap_or_default(),
        }
    }
}

fn count(name: &str, raw: Option<&str>) -> u32 {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return 0;
    };

    match text.parse::<i64>() {
        Ok(value) if value < 0 => {
            tracing::warn!(field = name, value, "Negative count clamped to 0");
            0
        }
        Ok(value) => u32::try_from(value).unwrap_or_else(|_err| {
            tracing::warn!(field = name, value, "Count too large, clamped");
            u32::MAX
        }),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            tracing::warn!(field = name, raw = text, "Count too large, clamped");
            u32::MAX
        }
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => {
            tracing::warn!(field = name, raw = text, "Negative count clamped to 0");
            0
        }
        Err(err) => {
            tracing::warn!(field = name, raw = text, %err, "Malformed count coerced to 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> SurveyForm {
        let mut form = SurveyForm::default();
        for (key, value) in pairs {
            let slot = match *key {
                "phones_drawer" => &mut form.phones_drawer,
                "laptops_5yrs" => &mut form.laptops_5yrs,
                "tvs_use" => &mut form.tvs_use,
                "chargers" => &mut form.chargers,
                "upgrade_freq" => &mut form.upgrade_freq,
                "old_device_action" => &mut form.old_device_action,
                _ => continue,
            };
            *slot = Some((*value).to_owned());
        }
        form
    }

    #[test]
    fn empty_form_is_the_default_survey() {
        assert_eq!(SurveyForm::default().into_input(), SurveyInput::default());
    }

    #[test]
    fn parses_every_field() {
        let input = form(&[
            ("phones_drawer", "2"),
            ("laptops_5yrs", " 1 "),
            ("tvs_use", "3"),
            ("chargers", "4"),
            ("upgrade_freq", "yearly"),
            ("old_device_action", "recycle"),
        ])
        .into_input();
        assert_eq!(
            input,
            SurveyInput {
                phones_in_drawer: 2,
                laptops_in_use: 1,
                tvs_in_use: 3,
                unused_chargers: 4,
                upgrade_frequency: UpgradeFrequency::Yearly,
                disposal: DisposalAction::Recycle,
            }
        );
    }

    #[test]
    fn coerces_bad_counts() {
        let input = form(&[
            ("phones_drawer", "-3"),
            ("laptops_5yrs", "two"),
            ("tvs_use", "1.5"),
            ("chargers", "99999999999"),
        ])
        .into_input();
        assert_eq!(input.phones_in_drawer, 0);
        assert_eq!(input.laptops_in_use, 0);
        assert_eq!(input.tvs_in_use, 0);
        assert_eq!(input.unused_chargers, u32::MAX);
    }

    #[test]
    fn clamps_counts_beyond_the_integer_range() {
        let input = form(&[
            ("phones_drawer", "99999999999999999999"),
            ("laptops_5yrs", "-99999999999999999999"),
            ("tvs_use", "+4294967296"),
        ])
        .into_input();
        assert_eq!(input.phones_in_drawer, u32::MAX);
        assert_eq!(input.laptops_in_use, 0);
        assert_eq!(input.tvs_in_use, u32::MAX);

        let smaller = form(&[("phones_drawer", "4294967295")]).into_input();
        assert!(input.phones_in_drawer >= smaller.phones_in_drawer);
    }

    #[test]
    fn unknown_codes_take_defaults() {
        let input = form(&[("upgrade_freq", "hourly"), ("old_device_action", "bury")]).into_input();
        assert_eq!(input.upgrade_frequency, UpgradeFrequency::ThreePlus);
        assert_eq!(input.disposal, DisposalAction::Keep);
    }
}
