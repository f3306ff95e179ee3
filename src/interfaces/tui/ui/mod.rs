//! Screen rendering
//!
//! One function per screen plus shared chrome (title tabs, status line,
//! footer hints) and the modal overlays. All drawing goes through
//! `ui()`, called once per frame by the run loop.

mod astro;
mod common;
mod dialogs;
mod form;
mod patterns;
mod sorteo_patterns;
mod sorteos;
mod tickets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::app::{App, CurrentScreen};

pub fn ui(frame: &mut Frame, app: &mut App) {
    let [title, body, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    common::render_title(frame, app, title);
    match app.current_screen {
        CurrentScreen::Login => common::render_login_backdrop(frame, body),
        CurrentScreen::Tickets => tickets::render(frame, app, body),
        CurrentScreen::Sorteos => sorteos::render(frame, app, body),
        CurrentScreen::Patrones => patterns::render(frame, app, body),
        CurrentScreen::SorteoPatrones => sorteo_patterns::render(frame, app, body),
        CurrentScreen::Astro => astro::render(frame, app, body),
    }
    common::render_status(frame, app, status);
    common::render_footer(frame, app, footer);

    dialogs::render(frame, app);
}
