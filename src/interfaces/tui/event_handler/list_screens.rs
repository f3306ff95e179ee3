//! Tickets and sorteos list screen key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::operations;
use crate::interfaces::tui::app::{App, DeleteTarget, Dialog, FormTarget};

pub fn handle_tickets_key(app: &mut App, key: KeyEvent) -> bool {
    // Search input mode: `/` search by number, submitted with Enter.
    if app.tickets.searching {
        match key.code {
            KeyCode::Enter => {
                app.tickets.searching = false;
                let number = app.tickets.search_input.trim().to_string();
                if number.is_empty() {
                    app.set_error("Enter a ticket number to search");
                } else {
                    app.tickets.loading = true;
                    operations::spawn_search_tickets(app.api.clone(), app.tx.clone(), number);
                }
            }
            KeyCode::Esc => {
                app.tickets.searching = false;
                app.tickets.search_input.clear();
            }
            KeyCode::Backspace => {
                app.tickets.search_input.pop();
            }
            KeyCode::Char(c) => app.tickets.search_input.push(c),
            _ => {}
        }
        return false;
    }

    // Filter input mode: `f` cycles date -> loteria -> jornada.
    if app.tickets.filters.editing.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.tickets.filters.editing = None;
            }
            KeyCode::Backspace => {
                if let Some(input) = app.tickets.filters.input_mut() {
                    input.pop();
                }
                app.tickets.refilter();
            }
            KeyCode::Char(c) => {
                if let Some(input) = app.tickets.filters.input_mut() {
                    input.push(c);
                }
                app.tickets.refilter();
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('r') => app.reload_tickets(),
        KeyCode::Char('/') => {
            app.tickets.searching = true;
            app.tickets.search_input.clear();
        }
        KeyCode::Char('f') => {
            let next = app
                .tickets
                .filters
                .editing
                .map_or(super::super::app::FilterField::Date, |f| f.next());
            app.tickets.filters.editing = Some(next);
        }
        KeyCode::Char('F') => {
            app.tickets.filters.clear();
            app.tickets.refilter();
            app.set_status("Filters cleared");
        }
        KeyCode::Up | KeyCode::Char('k') => app.tickets.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.tickets.select_next(),
        KeyCode::Char('[') => app.tickets.prev_page(),
        KeyCode::Char(']') => app.tickets.next_page(),
        KeyCode::Char('a') => {
            if app.require_admin() {
                app.open_form(FormTarget::TicketAdd);
            }
        }
        KeyCode::Char('e') => {
            if app.require_admin() {
                if let Some(ticket) = app.tickets.selected_item() {
                    let id = ticket.id;
                    app.open_form(FormTarget::TicketEdit(id));
                }
            }
        }
        KeyCode::Char('d') => {
            if app.require_admin() {
                if let Some(ticket) = app.tickets.selected_item() {
                    app.dialog = Some(Dialog::DeleteConfirm(DeleteTarget::Ticket(ticket.id)));
                }
            }
        }
        KeyCode::Char('u') => {
            if app.require_admin() {
                app.open_form(FormTarget::TicketUpload);
            }
        }
        _ => {}
    }
    false
}

pub fn handle_sorteos_key(app: &mut App, key: KeyEvent) -> bool {
    // Search mode takes number and serie; Tab flips between them.
    if app.sorteos.searching {
        match key.code {
            KeyCode::Enter => {
                app.sorteos.searching = false;
                let number = app.sorteos.search_input.trim().to_string();
                let serie = app.sorteos.search_serie.trim().to_string();
                if number.is_empty() && serie.is_empty() {
                    app.set_error("Enter a number or a serie to search");
                } else {
                    app.sorteos.loading = true;
                    operations::spawn_search_sorteos(
                        app.api.clone(),
                        app.tx.clone(),
                        (!number.is_empty()).then_some(number),
                        (!serie.is_empty()).then_some(serie),
                    );
                }
            }
            KeyCode::Esc => {
                app.sorteos.searching = false;
                app.sorteos.search_input.clear();
                app.sorteos.search_serie.clear();
            }
            KeyCode::Tab => {
                app.sorteos.search_field_serie = !app.sorteos.search_field_serie;
            }
            KeyCode::Backspace => {
                if app.sorteos.search_field_serie {
                    app.sorteos.search_serie.pop();
                } else {
                    app.sorteos.search_input.pop();
                }
            }
            KeyCode::Char(c) => {
                if app.sorteos.search_field_serie {
                    app.sorteos.search_serie.push(c);
                } else {
                    app.sorteos.search_input.push(c);
                }
            }
            _ => {}
        }
        return false;
    }

    if app.sorteos.filters.editing.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.sorteos.filters.editing = None;
            }
            KeyCode::Backspace => {
                if let Some(input) = app.sorteos.filters.input_mut() {
                    input.pop();
                }
                app.sorteos.refilter();
            }
            KeyCode::Char(c) => {
                if let Some(input) = app.sorteos.filters.input_mut() {
                    input.push(c);
                }
                app.sorteos.refilter();
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('r') => app.reload_sorteos(),
        KeyCode::Char('/') => {
            app.sorteos.searching = true;
            app.sorteos.search_field_serie = false;
            app.sorteos.search_input.clear();
            app.sorteos.search_serie.clear();
        }
        KeyCode::Char('f') => {
            let next = app
                .sorteos
                .filters
                .editing
                .map_or(super::super::app::FilterField::Date, |f| f.next());
            app.sorteos.filters.editing = Some(next);
        }
        KeyCode::Char('F') => {
            app.sorteos.filters.clear();
            app.sorteos.refilter();
            app.set_status("Filters cleared");
        }
        KeyCode::Up | KeyCode::Char('k') => app.sorteos.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.sorteos.select_next(),
        KeyCode::Char('[') => app.sorteos.prev_page(),
        KeyCode::Char(']') => app.sorteos.next_page(),
        KeyCode::Char('a') => {
            if app.require_admin() {
                app.open_form(FormTarget::SorteoAdd);
            }
        }
        KeyCode::Char('e') => {
            if app.require_admin() {
                if let Some(sorteo) = app.sorteos.selected_item() {
                    let id = sorteo.id;
                    app.open_form(FormTarget::SorteoEdit(id));
                }
            }
        }
        KeyCode::Char('d') => {
            if app.require_admin() {
                if let Some(sorteo) = app.sorteos.selected_item() {
                    app.dialog = Some(Dialog::DeleteConfirm(DeleteTarget::Sorteo(sorteo.id)));
                }
            }
        }
        KeyCode::Char('u') => {
            if app.require_admin() {
                app.open_form(FormTarget::SorteoUpload);
            }
        }
        _ => {}
    }
    false
}
