//! Key event dispatch
//!
//! Dialogs capture keys first; otherwise the current screen's handler
//! runs. Global shortcuts only apply while no text input is active.

mod astro_screen;
mod dialogs;
mod list_screens;
mod pattern_screens;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, CurrentScreen, Dialog};

/// Handle one key event; returns true when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if app.dialog.is_some() {
        return dialogs::handle_key(app, key);
    }

    // Global shortcuts, suppressed while a text input has focus.
    if !input_active(app) {
        match key.code {
            KeyCode::Char('q') => {
                app.dialog = Some(Dialog::Exiting);
                return false;
            }
            KeyCode::Char('?') => {
                app.dialog = Some(Dialog::Help);
                return false;
            }
            KeyCode::Tab => {
                app.next_screen();
                return false;
            }
            KeyCode::Char('1') => {
                app.switch_screen(CurrentScreen::Tickets);
                return false;
            }
            KeyCode::Char('2') => {
                app.switch_screen(CurrentScreen::Sorteos);
                return false;
            }
            KeyCode::Char('3') => {
                app.switch_screen(CurrentScreen::Patrones);
                return false;
            }
            KeyCode::Char('4') => {
                app.switch_screen(CurrentScreen::SorteoPatrones);
                return false;
            }
            KeyCode::Char('5') => {
                app.switch_screen(CurrentScreen::Astro);
                return false;
            }
            _ => {}
        }
    }

    match app.current_screen {
        CurrentScreen::Login => {
            // The login screen is just its dialog; reopen it if dismissed.
            app.open_form(super::app::FormTarget::Login);
            false
        }
        CurrentScreen::Tickets => list_screens::handle_tickets_key(app, key),
        CurrentScreen::Sorteos => list_screens::handle_sorteos_key(app, key),
        CurrentScreen::Patrones => pattern_screens::handle_patterns_key(app, key),
        CurrentScreen::SorteoPatrones => pattern_screens::handle_sorteo_patterns_key(app, key),
        CurrentScreen::Astro => astro_screen::handle_key(app, key),
    }
}

/// True while some inline text input on the current screen has focus.
fn input_active(app: &App) -> bool {
    match app.current_screen {
        CurrentScreen::Tickets => {
            app.tickets.searching || app.tickets.filters.editing.is_some()
        }
        CurrentScreen::Sorteos => {
            app.sorteos.searching || app.sorteos.filters.editing.is_some()
        }
        CurrentScreen::Patrones => app.patterns.search_focus.is_some(),
        CurrentScreen::SorteoPatrones => app.sorteo_patterns.search_editing,
        CurrentScreen::Astro => app.astro.search_focus.is_some(),
        CurrentScreen::Login => false,
    }
}
