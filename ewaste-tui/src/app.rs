use ewaste_core::{DisposalAction, EstimateReport, EwasteService, SurveyInput, UpgradeFrequency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Survey,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    PhonesInDrawer,
    LaptopsInUse,
    TvsInUse,
    UnusedChargers,
    UpgradeFrequency,
    Disposal,
}

impl Field {
    pub(crate) const ALL: [Self; 6] = [
        Self::PhonesInDrawer,
        Self::LaptopsInUse,
        Self::TvsInUse,
        Self::UnusedChargers,
        Self::UpgradeFrequency,
        Self::Disposal,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::PhonesInDrawer => "Old phones lying unused in a drawer",
            Self::LaptopsInUse => "Laptops currently in use",
            Self::TvsInUse => "Televisions currently in use",
            Self::UnusedChargers => "Chargers nobody uses anymore",
            Self::UpgradeFrequency => "How often do you get a new phone?",
            Self::Disposal => "What happens to your old devices?",
        }
    }
}

pub(crate) struct App {
    pub service: EwasteService,

    pub screen: Screen,
    pub input: SurveyInput,
    pub field_index: usize,

    pub report: Option<EstimateReport>,
}

impl App {
    pub(crate) fn new(service: EwasteService) -> Self {
        Self {
            service,
            screen: Screen::Survey,
            input: SurveyInput::default(),
            field_index: 0,
            report: None,
        }
    }

    pub(crate) fn selected_field(&self) -> Field {
        Field::ALL
            .get(self.field_index)
            .copied()
            .unwrap_or(Field::PhonesInDrawer)
    }

    pub(crate) fn value_text(&self, field: Field) -> String {
        match field {
            Field::PhonesInDrawer => self.input.phones_in_drawer.to_string(),
            Field::LaptopsInUse => self.input.laptops_in_use.to_string(),
            Field::TvsInUse => self.input.tvs_in_use.to_string(),
            Field::UnusedChargers => self.input.unused_chargers.to_string(),
            Field::UpgradeFrequency => self.input.upgrade_frequency.label().to_owned(),
            Field::Disposal => self.input.disposal.label().to_owned(),
        }
    }

    fn count_mut(&mut self, field: Field) -> Option<&mut u32> {
        match field {
            Field::PhonesInDrawer => Some(&mut self.input.phones_in_drawer),
            Field::LaptopsInUse => Some(&mut self.input.laptops_in_use),
            Field::TvsInUse => Some(&mut self.input.tvs_in_use),
            Field::UnusedChargers => Some(&mut self.input.unused_chargers),
            Field::UpgradeFrequency | Field::Disposal => None,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    pub(crate) fn select_next(&mut self) {
        if self.field_index + 1 < Field::ALL.len() {
            self.field_index += 1;
        }
    }

    /// Raise a count by one, or move an option forward.
    pub(crate) fn increment(&mut self) {
        let field = self.selected_field();
        match field {
            Field::UpgradeFrequency => {
                self.input.upgrade_frequency = cycle(
                    &UpgradeFrequency::ALL,
                    self.input.upgrade_frequency,
                    Step::Forward,
                );
            }
            Field::Disposal => {
                self.input.disposal =
                    cycle(&DisposalAction::ALL, self.input.disposal, Step::Forward);
            }
            _ => {
                if let Some(count) = self.count_mut(field) {
                    *count = count.saturating_add(1);
                }
            }
        }
    }

    /// Lower a count by one, or move an option back.
    pub(crate) fn decrement(&mut self) {
        let field = self.selected_field();
        match field {
            Field::UpgradeFrequency => {
                self.input.upgrade_frequency = cycle(
                    &UpgradeFrequency::ALL,
                    self.input.upgrade_frequency,
                    Step::Back,
                );
            }
            Field::Disposal => {
                self.input.disposal = cycle(&DisposalAction::ALL, self.input.disposal, Step::Back);
            }
            _ => {
                if let Some(count) = self.count_mut(field) {
                    *count = count.saturating_sub(1);
                }
            }
        }
    }

    /// Append a typed digit to the selected count.
    pub(crate) fn push_digit(&mut self, digit: u32) {
        let field = self.selected_field();
        if let Some(count) = self.count_mut(field) {
            *count = count.saturating_mul(10).saturating_add(digit);
        }
    }

    /// Drop the last digit of the selected count.
    pub(crate) fn pop_digit(&mut self) {
        let field = self.selected_field();
        if let Some(count) = self.count_mut(field) {
            *count /= 10;
        }
    }

    pub(crate) fn calculate(&mut self) {
        self.report = Some(self.service.report(&self.input));
        self.screen = Screen::Result;
    }

    pub(crate) fn reset(&mut self) {
        self.input = SurveyInput::default();
        self.field_index = 0;
        self.report = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Back,
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: Step) -> T {
    let len = options.len();
    let position = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let next = match step {
        Step::Forward => (position + 1) % len.max(1),
        Step::Back => (position + len.saturating_sub(1)) % len.max(1),
    };
    options.get(next).copied().unwrap_or(current)
}
