use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    match app.screen {
        Screen::Survey => match key.code {
            Up | Char('k') => app.select_previous(),
            Down | Char('j') | KeyCode::Tab => app.select_next(),
            Right | Char('l' | '+') => app.increment(),
            Left | Char('h' | '-') => app.decrement(),
            Char(character) => {
                if let Some(digit) = character.to_digit(10) {
                    app.push_digit(digit);
                } else if character == 'r' {
                    app.reset();
                }
            }
            Backspace => app.pop_digit(),
            Enter => app.calculate(),
            _ => {}
        },

        Screen::Result => match key.code {
            Left | Esc | Char('b') => {
                app.screen = Screen::Survey;
            }
            Char('r') => {
                app.reset();
                app.screen = Screen::Survey;
            }
            _ => {}
        },
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use ewaste_core::{BuiltinReference, DisposalAction, EwasteService, UpgradeFrequency};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::app::Field;

    fn app() -> App {
        App::new(EwasteService::from_source(&BuiltinReference).expect("built-in data loads"))
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    #[test]
    fn quit_shortcuts() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut app), Action::Quit);
    }

    #[test]
    fn typing_digits_edits_the_selected_count() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.input.phones_in_drawer, 12);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.phones_in_drawer, 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.input.phones_in_drawer, 2);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.input.phones_in_drawer, 0);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_field(), Field::PhonesInDrawer);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_field(), Field::Disposal);
    }

    #[test]
    fn options_cycle_in_both_directions() {
        let mut app = app();
        app.field_index = 4;
        assert_eq!(app.selected_field(), Field::UpgradeFrequency);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.input.upgrade_frequency, UpgradeFrequency::Yearly);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.input.upgrade_frequency, UpgradeFrequency::ThreePlus);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.input.disposal, DisposalAction::Recycle);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.input.disposal, DisposalAction::Recycle);
    }

    #[test]
    fn enter_calculates_and_escape_returns() {
        let mut app = app();
        app.field_index = 1;
        press(&mut app, KeyCode::Char('1'));
        app.field_index = 2;
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Result);
        let report = app.report.expect("report computed");
        assert_eq!(report.result.personal, dec!(1.61));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Survey);
        assert_eq!(app.input.tvs_in_use, 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.input.tvs_in_use, 0);
        assert!(app.report.is_none());
    }
}
