//! Modal dialog key handling: forms, confirmations, and popups.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::analytics::PatternScope;
use crate::client::{PatronsClient, SorteoPatronsClient, SorteosClient, TicketsClient};
use crate::interfaces::tui::app::forms::FormState;
use crate::interfaces::tui::app::operations::{self, Refresh};
use crate::interfaces::tui::app::{App, CurrentScreen, DeleteTarget, Dialog, FormTarget};
use crate::models::{JORNADAS, Pattern, Sorteo, Ticket};
use crate::utils::dates::{format_date, parse_date};

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(dialog) = app.dialog.take() else {
        return false;
    };
    match dialog {
        Dialog::Form { target, form } => {
            handle_form(app, key, target, form);
            false
        }
        Dialog::DeleteConfirm(target) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => confirm_delete(app, target),
                KeyCode::Char('n') | KeyCode::Esc => {}
                _ => app.dialog = Some(Dialog::DeleteConfirm(target)),
            }
            false
        }
        Dialog::Analysis(analysis) => {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {}
                _ => app.dialog = Some(Dialog::Analysis(analysis)),
            }
            false
        }
        Dialog::FdgResults { patterns, selected } => {
            handle_fdg_results(app, key, patterns, selected);
            false
        }
        Dialog::Help => false,
        Dialog::Exiting => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => true,
            KeyCode::Char('n') | KeyCode::Esc => false,
            _ => {
                app.dialog = Some(Dialog::Exiting);
                false
            }
        },
    }
}

fn handle_form(app: &mut App, key: KeyEvent, target: FormTarget, mut form: FormState) {
    // Ctrl-r flips between login and register while unauthenticated.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        match target {
            FormTarget::Login => {
                app.open_form(FormTarget::Register);
                return;
            }
            FormTarget::Register => {
                app.open_form(FormTarget::Login);
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => {}
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            app.dialog = Some(Dialog::Form { target, form });
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            app.dialog = Some(Dialog::Form { target, form });
        }
        KeyCode::Left => {
            form.cycle_option(-1);
            app.dialog = Some(Dialog::Form { target, form });
        }
        KeyCode::Right => {
            form.cycle_option(1);
            app.dialog = Some(Dialog::Form { target, form });
        }
        KeyCode::Backspace => {
            form.backspace();
            app.dialog = Some(Dialog::Form { target, form });
        }
        KeyCode::Enter => {
            if form.validate() {
                submit_form(app, target, form);
            } else {
                // Re-present with per-field messages, values intact.
                app.dialog = Some(Dialog::Form { target, form });
            }
        }
        KeyCode::Char(c) => {
            form.input_char(c);
            app.dialog = Some(Dialog::Form { target, form });
        }
        _ => app.dialog = Some(Dialog::Form { target, form }),
    }
}

/// Submit a validated form. Validation already checked date and number
/// formats, so parse failures here only re-present the form.
fn submit_form(app: &mut App, target: FormTarget, form: FormState) {
    match target {
        FormTarget::Login => {
            operations::spawn_login(
                app.api.clone(),
                app.tx.clone(),
                form.value("user_name").trim().to_string(),
                form.value("password").to_string(),
            );
            app.set_status("Logging in...");
            // Stays open until the login outcome closes it.
            app.dialog = Some(Dialog::Form { target, form });
        }
        FormTarget::Register => {
            operations::spawn_register(
                app.api.clone(),
                app.tx.clone(),
                form.value("user_name").trim().to_string(),
                form.value("password").to_string(),
            );
            app.set_status("Registering...");
            app.dialog = Some(Dialog::Form { target, form });
        }

        FormTarget::TicketAdd | FormTarget::TicketEdit(_) => {
            let Ok(date) = parse_date(form.value("date")) else {
                app.dialog = Some(Dialog::Form { target, form });
                return;
            };
            let sign = form.value("sign").trim();
            let mut ticket = Ticket {
                id: 0,
                number: form.value("number").trim().to_string(),
                date,
                loteria: form.value("loteria").to_string(),
                jornada: form.value("jornada").to_string(),
                sign: (!sign.is_empty()).then(|| sign.to_string()),
            };
            if let Err(e) = ticket.validate() {
                app.set_error(e.format_simple());
                app.dialog = Some(Dialog::Form { target, form });
                return;
            }
            let api = app.api.clone();
            match target {
                FormTarget::TicketEdit(id) => {
                    ticket.id = id;
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::Tickets,
                        "Ticket updated",
                        async move { TicketsClient::new(api).update(id, &ticket).await },
                    );
                }
                _ => operations::spawn_action(
                    app.tx.clone(),
                    Refresh::Tickets,
                    "Ticket created",
                    async move { TicketsClient::new(api).create(&ticket).await },
                ),
            }
        }

        FormTarget::SorteoAdd | FormTarget::SorteoEdit(_) => {
            let Ok(date) = parse_date(form.value("date")) else {
                app.dialog = Some(Dialog::Form { target, form });
                return;
            };
            let mut sorteo = Sorteo {
                id: 0,
                number: form.value("number").trim().to_string(),
                serie: form.value("serie").trim().to_string(),
                date,
                loteria: form.value("loteria").trim().to_string(),
            };
            if let Err(e) = sorteo.validate() {
                app.set_error(e.format_simple());
                app.dialog = Some(Dialog::Form { target, form });
                return;
            }
            let api = app.api.clone();
            match target {
                FormTarget::SorteoEdit(id) => {
                    sorteo.id = id;
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::Sorteos,
                        "Draw updated",
                        async move { SorteosClient::new(api).update(id, &sorteo).await },
                    );
                }
                _ => operations::spawn_action(
                    app.tx.clone(),
                    Refresh::Sorteos,
                    "Draw created",
                    async move { SorteosClient::new(api).create(&sorteo).await },
                ),
            }
        }

        FormTarget::PatternAdd | FormTarget::PatternEdit(_) => {
            let Ok(date) = parse_date(form.value("date")) else {
                app.dialog = Some(Dialog::Form { target, form });
                return;
            };
            let mut pattern = Pattern {
                id: None,
                date,
                jornada: form.value("jornada").to_string(),
                patron_numbers: form.numbers("numbers"),
                fdg: None,
            };
            let api = app.api.clone();
            match target {
                FormTarget::PatternEdit(id) => {
                    pattern.id = Some(id);
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::PatternSearch,
                        "Pattern updated",
                        async move { PatronsClient::new(api).update(id, &pattern).await },
                    );
                }
                _ => operations::spawn_action(
                    app.tx.clone(),
                    Refresh::PatternSearch,
                    "Pattern created",
                    async move { PatronsClient::new(api).create(&pattern).await },
                ),
            }
        }

        FormTarget::Range(scope) => {
            let dates = parse_date(form.value("date_init"))
                .and_then(|init| Ok((init, parse_date(form.value("date_final"))?)));
            let Ok((date_init, date_final)) = dates else {
                app.dialog = Some(Dialog::Form { target, form });
                return;
            };
            let api = app.api.clone();
            match scope {
                PatternScope::Chance => {
                    let jornada_init = form.value("jornada_init").to_string();
                    let jornada_final = form.value("jornada_final").to_string();
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::PatternSearch,
                        "Range calculated",
                        async move {
                            PatronsClient::new(api)
                                .calculate_range(
                                    date_init,
                                    &jornada_init,
                                    date_final,
                                    &jornada_final,
                                )
                                .await
                        },
                    );
                }
                PatternScope::Sorteo => {
                    operations::spawn_action(
                        app.tx.clone(),
                        Refresh::SorteoPatternSearch,
                        "Range calculated",
                        async move {
                            SorteoPatronsClient::new(api)
                                .calculate_range(date_init, date_final)
                                .await
                        },
                    );
                }
            }
            app.set_status("Calculating range...");
        }

        FormTarget::Fdg => {
            operations::spawn_fdg_search(
                app.api.clone(),
                app.tx.clone(),
                form.value("fdg").trim().to_string(),
                form.value("jornada").to_string(),
            );
            app.set_status("Searching patterns by FDG...");
        }

        FormTarget::TicketUpload | FormTarget::SorteoUpload => {
            let refresh = if target == FormTarget::SorteoUpload {
                Refresh::Sorteos
            } else {
                Refresh::Tickets
            };
            let file = PathBuf::from(form.value("file").trim());
            operations::spawn_upload(app.api.clone(), app.tx.clone(), refresh, file);
            app.set_status("Uploading...");
        }
    }
}

fn confirm_delete(app: &mut App, target: DeleteTarget) {
    let api = app.api.clone();
    match target {
        DeleteTarget::Ticket(id) => operations::spawn_action(
            app.tx.clone(),
            Refresh::Tickets,
            "Ticket deleted",
            async move { TicketsClient::new(api).delete(id).await },
        ),
        DeleteTarget::Sorteo(id) => operations::spawn_action(
            app.tx.clone(),
            Refresh::Sorteos,
            "Draw deleted",
            async move { SorteosClient::new(api).delete(id).await },
        ),
        DeleteTarget::Pattern(id) => operations::spawn_action(
            app.tx.clone(),
            Refresh::ClearPatterns,
            "Pattern deleted",
            async move { PatronsClient::new(api).delete(id).await },
        ),
        DeleteTarget::SorteoPattern(id) => operations::spawn_action(
            app.tx.clone(),
            Refresh::ClearSorteoPatterns,
            "Pattern deleted",
            async move { SorteoPatronsClient::new(api).delete(id).await },
        ),
    }
}

fn handle_fdg_results(app: &mut App, key: KeyEvent, patterns: Vec<Pattern>, selected: usize) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {}
        KeyCode::Up | KeyCode::Char('k') => {
            let selected = selected.saturating_sub(1);
            app.dialog = Some(Dialog::FdgResults { patterns, selected });
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let selected = (selected + 1).min(patterns.len().saturating_sub(1));
            app.dialog = Some(Dialog::FdgResults { patterns, selected });
        }
        KeyCode::Enter => {
            // Jump the pattern screen to the chosen result.
            if let Some(pattern) = patterns.get(selected) {
                app.patterns.search_date = format_date(pattern.date);
                app.patterns.search_jornada = JORNADAS
                    .iter()
                    .position(|j| *j == pattern.jornada)
                    .unwrap_or(0);
                app.current_screen = CurrentScreen::Patrones;
                app.search_patterns();
            }
        }
        _ => app.dialog = Some(Dialog::FdgResults { patterns, selected }),
    }
}
