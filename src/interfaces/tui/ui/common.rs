//! Shared chrome: title tabs, status line, footer hints, popup geometry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};

use crate::interfaces::tui::app::{App, CurrentScreen};

const SCREENS: &[(CurrentScreen, &str)] = &[
    (CurrentScreen::Tickets, "1 Tickets"),
    (CurrentScreen::Sorteos, "2 Sorteos"),
    (CurrentScreen::Patrones, "3 Patrones"),
    (CurrentScreen::SorteoPatrones, "4 Sorteo-Patrones"),
    (CurrentScreen::Astro, "5 Astro"),
];

pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let [tabs_area, user_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

    let selected = SCREENS
        .iter()
        .position(|(screen, _)| *screen == app.current_screen)
        .unwrap_or(0);
    let tabs = Tabs::new(SCREENS.iter().map(|(_, label)| *label))
        .select(selected)
        .highlight_style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    let user = match app.session.current() {
        Some(session) if session.role.is_admin() => {
            format!("{} (admin)", session.user_name)
        }
        Some(session) => session.user_name,
        None => "not logged in".to_string(),
    };
    frame.render_widget(
        Paragraph::new(user).right_aligned().dark_gray(),
        user_area,
    );
}

pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if !app.error_message.is_empty() {
        Line::from(Span::styled(
            format!(" ✗ {}", app.error_message),
            Style::new().fg(Color::Red),
        ))
    } else if !app.status_message.is_empty() {
        Line::from(Span::styled(
            format!(" ✓ {}", app.status_message),
            Style::new().fg(Color::Green),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.current_screen {
        CurrentScreen::Login => "Enter submit | Tab next field | Ctrl-r register | q quit",
        CurrentScreen::Tickets | CurrentScreen::Sorteos => {
            "/ search | f filter | [ ] page | a add | e edit | d delete | u upload | r reload | ? help | q quit"
        }
        CurrentScreen::Patrones => {
            "s search | t tab | n analysis tab | x analyze | c calc | R range | F fdg | ? help | q quit"
        }
        CurrentScreen::SorteoPatrones => {
            "s search | n analysis tab | c calc | R range | d delete | ? help | q quit"
        }
        CurrentScreen::Astro => "s search | c calculate | r reload | ? help | q quit",
    };
    frame.render_widget(Paragraph::new(hints).dark_gray(), area);
}

pub fn render_login_backdrop(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" chances ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new("Log in to continue").centered().dark_gray(),
        inner,
    );
}

/// Centered popup rectangle sized as a percentage of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Digit-frequency histogram, one bar per digit 0 through 9.
pub fn digit_barchart(title: String, values: &[u32]) -> BarChart<'static> {
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(digit, &count)| {
            Bar::default()
                .value(u64::from(count))
                .label(Line::from(digit.to_string()))
        })
        .collect();
    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::new().fg(Color::Cyan))
        .value_style(Style::new().fg(Color::Black).bg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(title))
}

/// One-line input rendering: value plus a cursor mark when focused.
pub fn input_span(value: &str, focused: bool) -> Span<'static> {
    let text = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };
    if focused {
        Span::styled(text, Style::new().fg(Color::Yellow))
    } else {
        Span::raw(text)
    }
}
