//! Astro screen: zodiac-sign histogram, the four digit rows as a heat
//! table, and the astro tickets for the window.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};

use super::common::input_span;
use super::patterns::render_tickets;
use crate::interfaces::tui::app::{App, SearchFocus};
use crate::models::{ASTRO_JORNADAS, AstroPatron, ZODIAC_SIGNS};
use crate::utils::colors::heat_rgb;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let [inputs, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    render_inputs(frame, app, inputs);

    let Some(astro) = app.astro.astro.clone() else {
        let text = if app.astro.loading {
            "Searching..."
        } else {
            "No astro pattern loaded. Press s to search a date and jornada."
        };
        frame.render_widget(
            Paragraph::new(text)
                .centered()
                .dark_gray()
                .block(Block::default().borders(Borders::ALL).title(" Astro ")),
            body,
        );
        return;
    };

    let [chart_area, heat_area, tickets_area] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .areas(body);

    render_sign_chart(frame, &astro, chart_area);
    render_heat_table(frame, &astro, heat_area);
    render_tickets(frame, " Astro tickets ", &app.astro.tickets, tickets_area);
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let jornada = ASTRO_JORNADAS[app.astro.search_jornada % ASTRO_JORNADAS.len()];
    let line = Line::from(vec![
        Span::raw(" date: "),
        input_span(
            &app.astro.search_date,
            app.astro.search_focus == Some(SearchFocus::Date),
        ),
        Span::raw("  jornada: "),
        input_span(jornada, app.astro.search_focus == Some(SearchFocus::Jornada)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_sign_chart(frame: &mut Frame, astro: &AstroPatron, area: Rect) {
    let bars: Vec<Bar> = astro
        .sign
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .value(u64::from(count))
                .label(Line::from(sign_label(i)))
        })
        .collect();
    let title = format!(" Signs {} {} ", astro.date, astro.jornada);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::new().fg(Color::Magenta))
        .value_style(Style::new().fg(Color::Black).bg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(chart, area);
}

fn sign_label(index: usize) -> String {
    ZODIAC_SIGNS
        .get(index)
        .map(|s| s.chars().take(3).collect())
        .unwrap_or_else(|| index.to_string())
}

/// Four rows of ten digit counts, cell background scaled teal to blue
/// per row maximum.
fn render_heat_table(frame: &mut Frame, astro: &AstroPatron, area: Rect) {
    let header = Row::new(
        std::iter::once(Cell::from("")).chain((0..10).map(|d| Cell::from(d.to_string()))),
    )
    .style(Style::new().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = [&astro.row1, &astro.row2, &astro.row3, &astro.row4]
        .into_iter()
        .enumerate()
        .map(|(i, values)| {
            let max = values.iter().copied().max().unwrap_or(0);
            let cells = std::iter::once(Cell::from(format!("R{}", i + 1))).chain(
                values.iter().map(|&v| {
                    let (r, g, b) = heat_rgb(v, max);
                    Cell::from(v.to_string())
                        .style(Style::new().fg(Color::Black).bg(Color::Rgb(r, g, b)))
                }),
            );
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(3)];
    widths.extend(std::iter::repeat_n(Constraint::Length(5), 10));
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Digit frequency per row "),
    );
    frame.render_widget(table, area);
}
