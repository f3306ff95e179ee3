//! Sorteos list screen.

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

    let header = Row::new(["Number", "Serie", "Date", "Loteria"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .sorteos
        .page_rows()
        .iter()
        .map(|&i| {
            let s = &app.sorteos.items[i];
            Row::new([
                s.number.clone(),
                s.serie.clone(),
                s.date.to_string(),
                s.loteria.clone(),
            ])
        })
        .collect();

    let title = if app.sorteos.loading {
        " Sorteos (loading...) ".to_string()
    } else {
        format!(
            " Sorteos — page {}/{} of {} ",
            app.sorteos.pager.page,
            app.sorteos.pager.page_count(),
            app.sorteos.visible.len()
        )
    };
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .row_highlight_style(Style::new().bg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_stateful_widget(table, table_area, &mut app.sorteos.table);
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" number: ")];
    spans.push(input_span(
        &app.sorteos.search_input,
        app.sorteos.searching && !app.sorteos.search_field_serie,
    ));
    spans.push(Span::raw("  serie: "));
    spans.push(input_span(
        &app.sorteos.search_serie,
        app.sorteos.searching && app.sorteos.search_field_serie,
    ));
    // Jornada does not apply to draws, so only two filters show here.
    for field in [FilterField::Date, FilterField::Loteria] {
        let value = match field {
            FilterField::Date => &app.sorteos.filters.date,
            _ => &app.sorteos.filters.loteria,
        };
        spans.push(Span::raw(format!("  {}: ", field.label())));
        spans.push(input_span(value, app.sorteos.filters.editing == Some(field)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
