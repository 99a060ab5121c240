use ewaste_core::{Comparison, EstimateReport, estimator::round_for_display};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use rust_decimal::Decimal;

use crate::app::{App, Field, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new("ewaste – how much electronic waste does your household make?")
        .block(Block::default().borders(Borders::ALL).title("ewaste"));
    frame.render_widget(header, *header_area);

    match (app.screen, app.report.as_ref()) {
        (Screen::Result, Some(report)) => draw_result(frame, report, *content_area),
        _ => draw_survey(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::Survey => {
            "↑/↓ move · ←/→ or digits change · Backspace erase · Enter calculate · r reset · q quit"
        }
        Screen::Result => "Esc/←/b back to survey · r start over · q/Ctrl-C quit",
    };

    let status = Paragraph::new(nav_hint)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, *status_area);
}

fn draw_survey(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = Field::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let prefix = if idx == app.field_index { "> " } else { "  " };
            let value = app.value_text(*field);
            ListItem::new(format!("{prefix}{:<40} {value}", field.label()))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Survey (Enter to calculate)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.field_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_result(frame: &mut Frame<'_>, report: &EstimateReport, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [summary_area, breakdown_area] = chunks else {
        return;
    };

    let result = &report.result;
    let summary = format!(
        "Your household: {personal:.2} kg of e-waste per year\n\
         {percent:.2}% of the national per-capita figure ({per_capita:.2} kg)\n\
         Average person: {average} kg per year",
        personal = result.personal,
        percent = result.contribution_percent,
        per_capita = result.per_capita,
        average = result.average_individual,
    );
    let summary = Paragraph::new(summary)
        .block(Block::default().borders(Borders::ALL).title("Estimate"))
        .style(Style::default().fg(comparison_color(result.comparison)))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, *summary_area);

    let parts = &report.breakdown;
    let rows = [
        ("Unused phones and chargers", kg(parts.unused_kg)),
        ("Share of laptops and TVs in use", kg(parts.active_kg)),
        ("Phone upgrades", kg(parts.upgrade_kg)),
        ("Disposal factor", format!("× {}", parts.disposal_factor)),
    ]
    .into_iter()
    .map(|(label, value)| Row::new(vec![Cell::from(label), Cell::from(value)]));

    let table = Table::new(rows, [Constraint::Min(34), Constraint::Length(14)])
        .header(
            Row::new(vec!["Source", "Amount"]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Breakdown"))
        .column_spacing(1);
    frame.render_widget(table, *breakdown_area);
}

fn kg(value: Decimal) -> String {
    format!("{:.2} kg", round_for_display(value))
}

fn comparison_color(comparison: Comparison) -> Color {
    match comparison {
        Comparison::Below => Color::Green,
        Comparison::Equal => Color::Yellow,
        Comparison::Above => Color::Red,
    }
}
