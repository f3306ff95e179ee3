//! Patrones screen: searched pattern histogram, redundancy table, and
//! the generators/generated/analysis tab area.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Wrap};

use super::common::{digit_barchart, input_span};
use crate::analytics::AnalyticsTab;
use crate::interfaces::tui::app::{App, DisplayTab, SearchFocus};
use crate::models::{JORNADAS, Pattern, Ticket};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let [inputs, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    render_inputs(frame, app, inputs);

    let Some(pattern) = app.patterns.pattern.clone() else {
        let text = if app.patterns.loading {
            "Searching..."
        } else {
            "No pattern loaded. Press s to search a date and jornada."
        };
        frame.render_widget(
            Paragraph::new(text)
                .centered()
                .dark_gray()
                .block(Block::default().borders(Borders::ALL).title(" Patron ")),
            body,
        );
        return;
    };

    let [top, tabs_area, content] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(body);
    let [chart_area, redundancy_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(top);

    let title = format!(
        " Patron {} {} fdg={} ",
        pattern.date,
        pattern.jornada,
        pattern.fdg.as_deref().unwrap_or("-")
    );
    frame.render_widget(digit_barchart(title, &pattern.patron_numbers), chart_area);
    render_redundancy(frame, app, redundancy_area);

    let tabs = ["Generators", "Generated", "Analysis"];
    let selected = match app.patterns.display_tab {
        Some(DisplayTab::Generators) | None => 0,
        Some(DisplayTab::Generated) => 1,
        Some(DisplayTab::Analysis) => 2,
    };
    frame.render_widget(
        Tabs::new(tabs)
            .select(selected)
            .highlight_style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        tabs_area,
    );

    match app.patterns.display_tab {
        Some(DisplayTab::Generated) => {
            render_tickets(frame, " Generated tickets ", &app.patterns.generated, content)
        }
        Some(DisplayTab::Analysis) => render_analysis(frame, app, content),
        _ => render_tickets(frame, " Generator tickets ", &app.patterns.generators, content),
    }
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let jornada = JORNADAS[app.patterns.search_jornada % JORNADAS.len()];
    let line = Line::from(vec![
        Span::raw(" date: "),
        input_span(
            &app.patterns.search_date,
            app.patterns.search_focus == Some(SearchFocus::Date),
        ),
        Span::raw("  jornada: "),
        input_span(
            jornada,
            app.patterns.search_focus == Some(SearchFocus::Jornada),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_redundancy(frame: &mut Frame, app: &App, area: Rect) {
    let header =
        Row::new(["Date", "Jornada", "Overlap"]).style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .patterns
        .redundancy
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = Row::new([
                entry.patron.date.to_string(),
                entry.patron.jornada.clone(),
                entry.redundancy_count.to_string(),
            ]);
            if i == app.patterns.redundancy_selected {
                row.style(Style::new().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Concurrencia (Enter jump, x analyze) "),
    );
    frame.render_widget(table, area);
}

fn render_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let [tabs_area, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let selected = match app.patterns.analysis_tab {
        AnalyticsTab::RedundancyInDate => 0,
        AnalyticsTab::NotPlayed => 1,
        AnalyticsTab::VoidPatterns => 2,
        AnalyticsTab::ColumnTotals => 3,
    };
    frame.render_widget(
        Tabs::new(["Redundancy in date", "Not played", "Void", "Column totals"])
            .select(selected)
            .highlight_style(Style::new().fg(Color::Yellow)),
        tabs_area,
    );

    if app.patterns.analysis_loading {
        frame.render_widget(Paragraph::new("Loading...").dark_gray(), content);
        return;
    }
    match app.patterns.analysis_tab {
        AnalyticsTab::RedundancyInDate => {
            render_pattern_list(frame, " Patterns sharing the date ", &app.patterns.redundancy_in_date, content)
        }
        AnalyticsTab::NotPlayed => {
            let text = if app.patterns.not_played.is_empty() {
                "Every number played in this window".to_string()
            } else {
                app.patterns.not_played.join(" ")
            };
            frame.render_widget(
                Paragraph::new(text).wrap(Wrap { trim: true }).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Numbers not played "),
                ),
                content,
            );
        }
        AnalyticsTab::VoidPatterns => render_pattern_list(
            frame,
            " Patterns with a void slot ",
            &app.patterns.void_patterns,
            content,
        ),
        AnalyticsTab::ColumnTotals => frame.render_widget(
            digit_barchart(
                " Totals per digit column ".to_string(),
                &app.patterns.column_totals,
            ),
            content,
        ),
    }
}

pub(super) fn render_pattern_list(frame: &mut Frame, title: &str, patterns: &[Pattern], area: Rect) {
    let header = Row::new(["Date", "Jornada", "Frequencies", "FDG"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = patterns
        .iter()
        .map(|p| {
            Row::new([
                p.date.to_string(),
                p.jornada.clone(),
                join_numbers(&p.patron_numbers),
                p.fdg.clone().unwrap_or_default(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(30),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(table, area);
}

pub(super) fn render_tickets(frame: &mut Frame, title: &str, tickets: &[Ticket], area: Rect) {
    let header = Row::new(["Number", "Date", "Loteria", "Jornada"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = tickets
        .iter()
        .map(|t| {
            Row::new([
                t.number.clone(),
                t.date.to_string(),
                t.loteria.clone(),
                t.jornada.clone(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(14),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(table, area);
}

pub(super) fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
