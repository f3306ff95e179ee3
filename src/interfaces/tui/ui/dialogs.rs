//! Modal overlay rendering: forms, confirmations, analysis, FDG results,
//! help, and the exit prompt.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap};

use super::common::centered_rect;
use super::form;
use super::patterns::join_numbers;
use crate::interfaces::tui::app::{App, DeleteTarget, Dialog};
use crate::models::RedundancyAnalysis;

pub fn render(frame: &mut Frame, app: &App) {
    match &app.dialog {
        None => {}
        Some(Dialog::Form { form, .. }) => form::render(frame, form),
        Some(Dialog::DeleteConfirm(target)) => render_delete_confirm(frame, *target),
        Some(Dialog::Analysis(analysis)) => render_analysis(frame, analysis.as_ref()),
        Some(Dialog::FdgResults { patterns, selected }) => {
            render_fdg_results(frame, patterns, *selected)
        }
        Some(Dialog::Help) => render_help(frame),
        Some(Dialog::Exiting) => render_confirm(frame, " Quit ", "Quit chances? (y/n)"),
    }
}

fn render_delete_confirm(frame: &mut Frame, target: DeleteTarget) {
    let what = match target {
        DeleteTarget::Ticket(_) => "this ticket",
        DeleteTarget::Sorteo(_) => "this draw",
        DeleteTarget::Pattern(_) | DeleteTarget::SorteoPattern(_) => "this pattern",
    };
    render_confirm(frame, " Delete ", &format!("Delete {}? (y/n)", what));
}

fn render_confirm(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message.to_string()).centered().block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::new().fg(Color::Red)),
        ),
        area,
    );
}

fn render_analysis(frame: &mut Frame, analysis: Option<&RedundancyAnalysis>) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pattern redundancy analysis ");

    let Some(analysis) = analysis else {
        frame.render_widget(
            Paragraph::new("Analyzing...").centered().dark_gray().block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Compared pattern: ", Style::new().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "{} {}  [{}]",
                analysis.patron.date,
                analysis.patron.jornada,
                join_numbers(&analysis.patron.patron_numbers)
            )),
        ]),
        Line::from(vec![
            Span::styled("Numbers in common: ", Style::new().add_modifier(Modifier::BOLD)),
            Span::raw(join_numbers(&analysis.numbers_to_search)),
        ]),
        Line::default(),
        Line::from(format!(
            "Tickets matching 4 digits: {}",
            analysis.tickets_con4_coincidencias.len()
        )),
    ];
    for t in &analysis.tickets_con4_coincidencias {
        lines.push(Line::from(format!(
            "  {}  {}  {} {}",
            t.number, t.date, t.loteria, t.jornada
        )));
    }
    lines.push(Line::from(format!(
        "Tickets matching 3 digits: {}",
        analysis.tickets_con3_coincidencias.len()
    )));
    for t in &analysis.tickets_con3_coincidencias {
        lines.push(Line::from(format!(
            "  {}  {}  {} {}",
            t.number, t.date, t.loteria, t.jornada
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc close",
        Style::new().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_fdg_results(frame: &mut Frame, patterns: &[crate::models::Pattern], selected: usize) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let header = Row::new(["Date", "Jornada", "Frequencies", "FDG"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = patterns
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let row = Row::new([
                p.date.to_string(),
                p.jornada.clone(),
                join_numbers(&p.patron_numbers),
                p.fdg.clone().unwrap_or_default(),
            ]);
            if i == selected {
                row.style(Style::new().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();
    let title = format!(" FDG matches ({}) — Enter jump, Esc close ", patterns.len());
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
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);
    let lines = [
        "Global",
        "  1-5 / Tab    switch screen",
        "  q            quit    ? this help",
        "",
        "Tickets / Sorteos",
        "  /  search    f filter    F clear filters",
        "  [ ]  page    j k / arrows  move",
        "  a add   e edit   d delete   u upload   r reload",
        "",
        "Patrones / Sorteo-Patrones",
        "  s  search    t display tab    n analysis tab",
        "  Enter jump to redundant pattern    x analyze pair",
        "  c calculate   R calculate range   F search by FDG",
        "",
        "Astro",
        "  s  search    c calculate    r reload",
        "",
        "Admin role is required for every mutating action.",
    ]
    .into_iter()
    .map(Line::from)
    .collect::<Vec<_>>();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — any key closes "),
        ),
        area,
    );
}
