//! Pattern screen key handling, chance and sorteo variants.

use crossterm::event::{KeyCode, KeyEvent};

use crate::analytics::{AnalyticsTab, PatternScope};
use crate::client::{PatronsClient, SorteoPatronsClient};
use crate::interfaces::tui::app::operations::{self, Refresh};
use crate::interfaces::tui::app::{App, DeleteTarget, Dialog, FormTarget, SearchFocus};
use crate::models::JORNADAS;
use crate::utils::dates::format_date;

pub fn handle_patterns_key(app: &mut App, key: KeyEvent) -> bool {
    // Search control editing: date text plus a cycled jornada.
    if let Some(focus) = app.patterns.search_focus {
        match key.code {
            KeyCode::Enter => {
                app.patterns.search_focus = None;
                app.search_patterns();
            }
            KeyCode::Esc => app.patterns.search_focus = None,
            KeyCode::Tab => {
                app.patterns.search_focus = Some(match focus {
                    SearchFocus::Date => SearchFocus::Jornada,
                    SearchFocus::Jornada => SearchFocus::Date,
                });
            }
            KeyCode::Left if focus == SearchFocus::Jornada => {
                app.patterns.search_jornada =
                    (app.patterns.search_jornada + JORNADAS.len() - 1) % JORNADAS.len();
            }
            KeyCode::Right if focus == SearchFocus::Jornada => {
                app.patterns.search_jornada = (app.patterns.search_jornada + 1) % JORNADAS.len();
            }
            KeyCode::Backspace if focus == SearchFocus::Date => {
                app.patterns.search_date.pop();
            }
            KeyCode::Char(c) if focus == SearchFocus::Date => {
                app.patterns.search_date.push(c);
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.patterns.search_focus = Some(SearchFocus::Date);
        }
        KeyCode::Char('t') => {
            if let Some(tab) = app.patterns.display_tab {
                let next = tab.next();
                app.patterns.display_tab = Some(next);
                if next == super::super::app::DisplayTab::Analysis {
                    let tab = app.patterns.analysis_tab;
                    app.load_analysis_tab(PatternScope::Chance, tab);
                }
            }
        }
        KeyCode::Char('n') => {
            // Cycle analysis sub-tab; each switch goes through the loader.
            if app.patterns.display_tab == Some(super::super::app::DisplayTab::Analysis) {
                let next = match app.patterns.analysis_tab {
                    AnalyticsTab::RedundancyInDate => AnalyticsTab::NotPlayed,
                    AnalyticsTab::NotPlayed => AnalyticsTab::VoidPatterns,
                    AnalyticsTab::VoidPatterns => AnalyticsTab::ColumnTotals,
                    AnalyticsTab::ColumnTotals => AnalyticsTab::RedundancyInDate,
                };
                app.patterns.analysis_tab = next;
                app.load_analysis_tab(PatternScope::Chance, next);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.patterns.redundancy_selected > 0 {
                app.patterns.redundancy_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.patterns.redundancy_selected + 1 < app.patterns.redundancy.len() {
                app.patterns.redundancy_selected += 1;
            }
        }
        KeyCode::Enter => {
            // Jump to the selected redundant pattern's window.
            if let Some(entry) = app.patterns.selected_redundancy() {
                let date = entry.patron.date;
                let jornada = entry.patron.jornada.clone();
                app.patterns.search_date = format_date(date);
                app.patterns.search_jornada = JORNADAS
                    .iter()
                    .position(|j| *j == jornada)
                    .unwrap_or(0);
                app.search_patterns();
            }
        }
        KeyCode::Char('x') => {
            let ids = app.patterns.pattern.as_ref().and_then(|p| {
                let other = app.patterns.selected_redundancy()?;
                Some((p.id?, other.patron.id?))
            });
            if let Some((patron1_id, patron2_id)) = ids {
                app.dialog = Some(Dialog::Analysis(None));
                operations::spawn_analysis(app.api.clone(), app.tx.clone(), patron1_id, patron2_id);
            }
        }
        KeyCode::Char('c') => {
            if app.require_admin() {
                if let Ok(date) = crate::utils::dates::parse_date(&app.patterns.search_date) {
                    let jornada = JORNADAS[app.patterns.search_jornada % JORNADAS.len()].to_string();
                    let api = app.api.clone();
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::PatternSearch,
                        "Pattern calculated",
                        async move { PatronsClient::new(api).calculate(date, &jornada).await },
                    );
                } else {
                    app.set_error("Set a valid search date first");
                }
            }
        }
        KeyCode::Char('R') => {
            if app.require_admin() {
                app.open_form(FormTarget::Range(PatternScope::Chance));
            }
        }
        KeyCode::Char('F') => app.open_form(FormTarget::Fdg),
        KeyCode::Char('a') => {
            if app.require_admin() {
                app.open_form(FormTarget::PatternAdd);
            }
        }
        KeyCode::Char('e') => {
            if app.require_admin() {
                if let Some(id) = app.patterns.pattern.as_ref().and_then(|p| p.id) {
                    app.open_form(FormTarget::PatternEdit(id));
                }
            }
        }
        KeyCode::Char('d') => {
            if app.require_admin() {
                if let Some(id) = app.patterns.pattern.as_ref().and_then(|p| p.id) {
                    app.dialog = Some(Dialog::DeleteConfirm(DeleteTarget::Pattern(id)));
                }
            }
        }
        _ => {}
    }
    false
}

pub fn handle_sorteo_patterns_key(app: &mut App, key: KeyEvent) -> bool {
    if app.sorteo_patterns.search_editing {
        match key.code {
            KeyCode::Enter => {
                app.sorteo_patterns.search_editing = false;
                app.search_sorteo_patterns();
            }
            KeyCode::Esc => app.sorteo_patterns.search_editing = false,
            KeyCode::Backspace => {
                app.sorteo_patterns.search_date.pop();
            }
            KeyCode::Char(c) => app.sorteo_patterns.search_date.push(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.sorteo_patterns.search_editing = true;
        }
        KeyCode::Char('n') => {
            let next = match app.sorteo_patterns.analysis_tab {
                AnalyticsTab::RedundancyInDate => AnalyticsTab::NotPlayed,
                AnalyticsTab::NotPlayed => AnalyticsTab::VoidPatterns,
                AnalyticsTab::VoidPatterns => AnalyticsTab::ColumnTotals,
                AnalyticsTab::ColumnTotals => AnalyticsTab::RedundancyInDate,
            };
            app.sorteo_patterns.analysis_tab = next;
            // Column totals were fetched with the pattern; reloading is
            // still correct and keeps the view fresh.
            app.load_analysis_tab(PatternScope::Sorteo, next);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.sorteo_patterns.redundancy_selected > 0 {
                app.sorteo_patterns.redundancy_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.sorteo_patterns.redundancy_selected + 1 < app.sorteo_patterns.redundancy.len() {
                app.sorteo_patterns.redundancy_selected += 1;
            }
        }
        KeyCode::Enter => {
            let date = app
                .sorteo_patterns
                .redundancy
                .get(app.sorteo_patterns.redundancy_selected)
                .map(|entry| entry.patron.date);
            if let Some(date) = date {
                app.sorteo_patterns.search_date = format_date(date);
                app.search_sorteo_patterns();
            }
        }
        KeyCode::Char('c') => {
            if app.require_admin() {
                if let Ok(date) = crate::utils::dates::parse_date(&app.sorteo_patterns.search_date)
                {
                    let api = app.api.clone();
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::SorteoPatternSearch,
                        "Pattern calculated",
                        async move { SorteoPatronsClient::new(api).calculate(date).await },
                    );
                } else {
                    app.set_error("Set a valid search date first");
                }
            }
        }
        KeyCode::Char('R') => {
            if app.require_admin() {
                app.open_form(FormTarget::Range(PatternScope::Sorteo));
            }
        }
        KeyCode::Char('d') => {
            if app.require_admin() {
                if let Some(id) = app.sorteo_patterns.pattern.as_ref().and_then(|p| p.id) {
                    app.dialog = Some(Dialog::DeleteConfirm(DeleteTarget::SorteoPattern(id)));
                }
            }
        }
        _ => {}
    }
    false
}
