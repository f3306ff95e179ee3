//! Astro screen key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::client::AstroClient;
use crate::interfaces::tui::app::operations::{self, Refresh};
use crate::interfaces::tui::app::{App, SearchFocus};
use crate::models::ASTRO_JORNADAS;

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if let Some(focus) = app.astro.search_focus {
        match key.code {
            KeyCode::Enter => {
                app.astro.search_focus = None;
                app.load_astro();
            }
            KeyCode::Esc => app.astro.search_focus = None,
            KeyCode::Tab => {
                app.astro.search_focus = Some(match focus {
                    SearchFocus::Date => SearchFocus::Jornada,
                    SearchFocus::Jornada => SearchFocus::Date,
                });
            }
            KeyCode::Left | KeyCode::Right if focus == SearchFocus::Jornada => {
                // Two jornadas, so either arrow flips Sol/Luna.
                app.astro.search_jornada = (app.astro.search_jornada + 1) % ASTRO_JORNADAS.len();
            }
            KeyCode::Backspace if focus == SearchFocus::Date => {
                app.astro.search_date.pop();
            }
            KeyCode::Char(c) if focus == SearchFocus::Date => {
                app.astro.search_date.push(c);
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.astro.search_focus = Some(SearchFocus::Date);
        }
        KeyCode::Char('r') => app.load_astro(),
        KeyCode::Char('c') => {
            if app.require_admin() {
                if let Ok(date) = crate::utils::dates::parse_date(&app.astro.search_date) {
                    let jornada =
                        ASTRO_JORNADAS[app.astro.search_jornada % ASTRO_JORNADAS.len()].to_string();
                    let api = app.api.clone();
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::Astro,
                        "Astro pattern calculated",
                        async move { AstroClient::new(api).calculate(date, &jornada).await },
                    );
                } else {
                    app.set_error("Set a valid search date first");
                }
            }
        }
        _ => {}
    }
    false
}
