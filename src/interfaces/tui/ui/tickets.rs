//! Tickets list screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use super::common::input_span;
use crate::interfaces::tui::app::{App, FilterField};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let [inputs, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_inputs(frame, app, inputs);

    let header = Row::new(["Number", "Date", "Loteria", "Jornada", "Sign"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .tickets
        .page_rows()
        .iter()
        .map(|&i| {
            let t = &app.tickets.items[i];
            Row::new([
                t.number.clone(),
                t.date.to_string(),
                t.loteria.clone(),
                t.jornada.clone(),
                t.sign.clone().unwrap_or_default(),
            ])
        })
        .collect();

    let title = if app.tickets.loading {
        " Tickets (loading...) ".to_string()
    } else {
        format!(
            " Tickets — page {}/{} of {} ",
            app.tickets.pager.page,
            app.tickets.pager.page_count(),
            app.tickets.visible.len()
        )
    };
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(Style::new().bg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_stateful_widget(table, table_area, &mut app.tickets.table);
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" search: ")];
    spans.push(input_span(&app.tickets.search_input, app.tickets.searching));
    for field in [FilterField::Date, FilterField::Loteria, FilterField::Jornada] {
        let value = match field {
            FilterField::Date => &app.tickets.filters.date,
            FilterField::Loteria => &app.tickets.filters.loteria,
            FilterField::Jornada => &app.tickets.filters.jornada,
        };
        spans.push(Span::raw(format!("  {}: ", field.label())));
        spans.push(input_span(value, app.tickets.filters.editing == Some(field)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
