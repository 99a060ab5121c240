//! Terminal UI for ewaste that walks through the household survey and shows the estimate.
//!
//! Pass a reference file path as the first argument to override the built-in figures.

mod app;
mod input;
mod ui;

use std::{env, io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ewaste_core::{BuiltinReference, EwasteService, FileReference, ReferenceSource};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::input::Action;

fn main() -> Result<()> {
    // Load reference data before taking over the terminal
    let source: Box<dyn ReferenceSource> = match env::args_os().nth(1) {
        Some(path) => Box::new(FileReference::new(path)),
        None => Box::new(BuiltinReference),
    };
    let service = EwasteService::from_source(source.as_ref())
        .with_context(|| format!("Failed to load {}", source.describe()))?;

    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input with a small timeout to keep CPU low
        if event::poll(Duration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && input::handle_key_event(key, &mut app) == Action::Quit
        {
            break;
        }
    }

    Ok(())
}
