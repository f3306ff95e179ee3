//! Sorteo-Patrones screen: draw pattern histogram, redundancy table, and
//! the four-way analysis area. No jornada dimension here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Wrap};

use super::common::{digit_barchart, input_span};
use crate::analytics::AnalyticsTab;
use crate::interfaces::tui::app::App;
use crate::models::SorteoPattern;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let [inputs, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let line = Line::from(vec![
        Span::raw(" date: "),
        input_span(
            &app.sorteo_patterns.search_date,
            app.sorteo_patterns.search_editing,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inputs);

    let Some(pattern) = app.sorteo_patterns.pattern.clone() else {
        let text = if app.sorteo_patterns.loading {
            "Searching..."
        } else {
            "No pattern loaded. Press s to search a date."
        };
        frame.render_widget(
            Paragraph::new(text)
                .centered()
                .dark_gray()
                .block(Block::default().borders(Borders::ALL).title(" Sorteo patron ")),
            body,
        );
        return;
    };

    let [top, analysis] =
        Layout::vertical([Constraint::Length(12), Constraint::Min(0)]).areas(body);
    let [chart_area, redundancy_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(top);

    let title = format!(" Sorteo patron {} ", pattern.date);
    frame.render_widget(digit_barchart(title, &pattern.patron_numbers), chart_area);
    render_redundancy(frame, app, redundancy_area);
    render_analysis(frame, app, analysis);
}

fn render_redundancy(frame: &mut Frame, app: &App, area: Rect) {
    let header =
        Row::new(["Date", "Overlap"]).style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .sorteo_patterns
        .redundancy
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = Row::new([
                entry.patron.date.to_string(),
                entry.redundancy_count.to_string(),
            ]);
            if i == app.sorteo_patterns.redundancy_selected {
                row.style(Style::new().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();
    let table = Table::new(rows, [Constraint::Length(12), Constraint::Length(7)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Concurrencia (Enter jump) "),
        );
    frame.render_widget(table, area);
}

fn render_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let [tabs_area, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let selected = match app.sorteo_patterns.analysis_tab {
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

    if app.sorteo_patterns.analysis_loading {
        frame.render_widget(Paragraph::new("Loading...").dark_gray(), content);
        return;
    }
    match app.sorteo_patterns.analysis_tab {
        AnalyticsTab::RedundancyInDate => render_pattern_list(
            frame,
            " Patterns sharing the date ",
            &app.sorteo_patterns.redundancy_in_date,
            content,
        ),
        AnalyticsTab::NotPlayed => {
            let text = if app.sorteo_patterns.not_played.is_empty() {
                "Every number played on this date".to_string()
            } else {
                app.sorteo_patterns.not_played.join(" ")
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
            &app.sorteo_patterns.void_patterns,
            content,
        ),
        AnalyticsTab::ColumnTotals => {
            frame.render_widget(
                digit_barchart(
                    " Totals per digit column ".to_string(),
                    &app.sorteo_patterns.column_totals,
                ),
                content,
            );
        }
    }
}

fn render_pattern_list(frame: &mut Frame, title: &str, patterns: &[SorteoPattern], area: Rect) {
    let header =
        Row::new(["Date", "Frequencies"]).style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = patterns
        .iter()
        .map(|p| {
            Row::new([
                p.date.to_string(),
                super::patterns::join_numbers(&p.patron_numbers),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(30)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(table, area);
}
