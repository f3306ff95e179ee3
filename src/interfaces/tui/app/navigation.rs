//! Screen switching and dialog opening.

use super::forms::{self, FormState};
use super::{App, CurrentScreen, Dialog, FormTarget};
use crate::analytics::PatternScope;
use crate::utils::dates::{format_date, today};

impl App {
    /// Switch screens, fetching the list screens on first entry.
    pub fn switch_screen(&mut self, screen: CurrentScreen) {
        if !self.session.is_logged_in() && screen != CurrentScreen::Login {
            self.set_error("Log in first");
            return;
        }
        self.current_screen = screen;
        match screen {
            CurrentScreen::Tickets if self.tickets.items.is_empty() => self.reload_tickets(),
            CurrentScreen::Sorteos if self.sorteos.items.is_empty() => self.reload_sorteos(),
            CurrentScreen::Patrones if self.patterns.search_date.is_empty() => {
                self.patterns.search_date = format_date(today());
            }
            CurrentScreen::SorteoPatrones if self.sorteo_patterns.search_date.is_empty() => {
                self.sorteo_patterns.search_date = format_date(today());
            }
            CurrentScreen::Astro if self.astro.search_date.is_empty() => {
                self.astro.search_date = format_date(today());
            }
            _ => {}
        }
    }

    pub fn next_screen(&mut self) {
        let next = match self.current_screen {
            CurrentScreen::Login => CurrentScreen::Login,
            CurrentScreen::Tickets => CurrentScreen::Sorteos,
            CurrentScreen::Sorteos => CurrentScreen::Patrones,
            CurrentScreen::Patrones => CurrentScreen::SorteoPatrones,
            CurrentScreen::SorteoPatrones => CurrentScreen::Astro,
            CurrentScreen::Astro => CurrentScreen::Tickets,
        };
        self.switch_screen(next);
    }

    pub fn open_form(&mut self, target: FormTarget) {
        let form = match target {
            FormTarget::Login => {
                let mut form = FormState::new(forms::login_form());
                form.mask_input = true;
                form
            }
            FormTarget::Register => {
                let mut form = FormState::new(forms::register_form());
                form.mask_input = true;
                form
            }
            FormTarget::TicketAdd => FormState::new(forms::ticket_form()),
            FormTarget::TicketEdit(_) => {
                let Some(ticket) = self.tickets.selected_item() else {
                    return;
                };
                FormState::with_values(
                    forms::ticket_form(),
                    &[
                        ("number", ticket.number.clone()),
                        ("date", format_date(ticket.date)),
                        ("loteria", ticket.loteria.clone()),
                        ("jornada", ticket.jornada.clone()),
                        ("sign", ticket.sign.clone().unwrap_or_default()),
                    ],
                )
            }
            FormTarget::SorteoAdd => FormState::new(forms::sorteo_form()),
            FormTarget::SorteoEdit(_) => {
                let Some(sorteo) = self.sorteos.selected_item() else {
                    return;
                };
                FormState::with_values(
                    forms::sorteo_form(),
                    &[
                        ("number", sorteo.number.clone()),
                        ("serie", sorteo.serie.clone()),
                        ("date", format_date(sorteo.date)),
                        ("loteria", sorteo.loteria.clone()),
                    ],
                )
            }
            FormTarget::PatternAdd => FormState::new(forms::pattern_form(true)),
            FormTarget::PatternEdit(_) => {
                let Some(pattern) = &self.patterns.pattern else {
                    return;
                };
                let numbers = pattern
                    .patron_numbers
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                FormState::with_values(
                    forms::pattern_form(true),
                    &[
                        ("date", format_date(pattern.date)),
                        ("jornada", pattern.jornada.clone()),
                        ("numbers", numbers),
                    ],
                )
            }
            FormTarget::Range(PatternScope::Chance) => FormState::new(forms::range_form(true)),
            FormTarget::Range(PatternScope::Sorteo) => FormState::new(forms::range_form(false)),
            FormTarget::Fdg => FormState::new(forms::fdg_form()),
            FormTarget::TicketUpload | FormTarget::SorteoUpload => {
                FormState::new(forms::upload_form())
            }
        };
        self.dialog = Some(Dialog::Form { target, form });
    }

    /// Admin gate shared by every mutating shortcut.
    pub fn require_admin(&mut self) -> bool {
        if self.is_admin() {
            true
        } else {
            self.set_error("Admin role required");
            false
        }
    }
}
