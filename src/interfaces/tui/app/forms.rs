//! Descriptor-driven form engine
//!
//! Every dialog form (ticket, sorteo, pattern, range, FDG, login,
//! register) is a `FormSchema`: a list of field descriptors. The engine
//! owns focus cycling, editing, option cycling, and validation, so the
//! screens declare fields instead of hand-rolling input state.

use std::collections::HashMap;

use crate::models::{ASTRO_JORNADAS, JORNADAS, LOTERIAS, ZODIAC_SIGNS};
use crate::utils::dates::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that must parse as yyyy-MM-dd.
    Date,
    /// One value from a fixed option list, cycled with left/right.
    Select(&'static [&'static str]),
    /// Whitespace-separated list of exactly `count` numbers.
    Numbers(usize),
}

/// Whether a field must be non-empty, possibly depending on another
/// field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    Optional,
    /// Required iff `field` currently equals `value`; cleared otherwise.
    IfEquals {
        field: &'static str,
        value: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: Requirement,
}

#[derive(Debug, Clone)]
pub struct FormSchema {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Live state of one open form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub schema: FormSchema,
    values: Vec<String>,
    pub focus: usize,
    pub validation_errors: HashMap<&'static str, String>,
    /// Fields are masked in the UI when true (login forms).
    pub mask_input: bool,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| match f.kind {
                // Selects start on their first option.
                FieldKind::Select(options) => options.first().copied().unwrap_or("").to_string(),
                _ => String::new(),
            })
            .collect();
        Self {
            schema,
            values,
            focus: 0,
            validation_errors: HashMap::new(),
            mask_input: false,
        }
    }

    /// Pre-fill from an existing record for edit forms.
    pub fn with_values(schema: FormSchema, initial: &[(&str, String)]) -> Self {
        let mut form = Self::new(schema);
        for (key, value) in initial {
            form.set_value(key, value.clone());
        }
        form
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.schema.fields.iter().position(|f| f.key == key)
    }

    pub fn value(&self, key: &str) -> &str {
        self.index_of(key)
            .map(|i| self.values[i].as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: String) {
        if let Some(i) = self.index_of(key) {
            self.values[i] = value;
        }
    }

    pub fn focused_field(&self) -> &FieldSpec {
        &self.schema.fields[self.focus]
    }

    pub fn field_value(&self, index: usize) -> &str {
        &self.values[index]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.schema.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.schema.fields.len() - 1) % self.schema.fields.len();
    }

    pub fn input_char(&mut self, c: char) {
        match self.focused_field().kind {
            FieldKind::Select(_) => {}
            _ => self.values[self.focus].push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field().kind {
            FieldKind::Select(_) => {}
            _ => {
                self.values[self.focus].pop();
            }
        }
    }

    /// Cycle the focused select field by `delta` (+1 or -1).
    pub fn cycle_option(&mut self, delta: isize) {
        if let FieldKind::Select(options) = self.focused_field().kind {
            if options.is_empty() {
                return;
            }
            let current = options
                .iter()
                .position(|o| *o == self.values[self.focus])
                .unwrap_or(0) as isize;
            let next = (current + delta).rem_euclid(options.len() as isize) as usize;
            self.values[self.focus] = options[next].to_string();
        }
    }

    fn requirement_met(&self, spec: &FieldSpec) -> bool {
        match spec.required {
            Requirement::Always => true,
            Requirement::Optional => false,
            Requirement::IfEquals { field, value } => self.value(field) == value,
        }
    }

    /// Validate all fields, recording one message per failing field.
    /// Conditionally-required fields whose condition does not hold are
    /// cleared, matching the ticket form's sign behavior.
    pub fn validate(&mut self) -> bool {
        self.validation_errors.clear();
        for i in 0..self.schema.fields.len() {
            let spec = self.schema.fields[i].clone();
            let required = self.requirement_met(&spec);
            let value = self.values[i].trim().to_string();

            if let Requirement::IfEquals { .. } = spec.required {
                if !required {
                    self.values[i].clear();
                    continue;
                }
            }

            if value.is_empty() {
                if required {
                    self.validation_errors
                        .insert(spec.key, format!("{} is required", spec.label));
                }
                continue;
            }

            match spec.kind {
                FieldKind::Date => {
                    if parse_date(&value).is_err() {
                        self.validation_errors
                            .insert(spec.key, "expected yyyy-MM-dd".to_string());
                    }
                }
                FieldKind::Numbers(count) => {
                    let parsed: Vec<_> = value
                        .split_whitespace()
                        .map(|n| n.parse::<u32>())
                        .collect();
                    if parsed.len() != count || parsed.iter().any(|p| p.is_err()) {
                        self.validation_errors
                            .insert(spec.key, format!("expected {} numbers", count));
                    }
                }
                FieldKind::Text | FieldKind::Select(_) => {}
            }
        }
        self.validation_errors.is_empty()
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.validation_errors.get(key).map(String::as_str)
    }

    /// Parsed numbers for a `Numbers` field; call after `validate`.
    pub fn numbers(&self, key: &str) -> Vec<u32> {
        self.value(key)
            .split_whitespace()
            .filter_map(|n| n.parse().ok())
            .collect()
    }
}

// ---- Schema constructors ----

pub fn ticket_form() -> FormSchema {
    FormSchema {
        title: "Ticket",
        fields: vec![
            FieldSpec {
                key: "number",
                label: "Number",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "date",
                label: "Date",
                kind: FieldKind::Date,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "loteria",
                label: "Loteria",
                kind: FieldKind::Select(LOTERIAS),
                required: Requirement::Always,
            },
            FieldSpec {
                key: "jornada",
                label: "Jornada",
                kind: FieldKind::Select(JORNADAS),
                required: Requirement::Always,
            },
            FieldSpec {
                key: "sign",
                label: "Sign",
                kind: FieldKind::Select(ZODIAC_SIGNS),
                required: Requirement::IfEquals {
                    field: "loteria",
                    value: "Astro",
                },
            },
        ],
    }
}

pub fn sorteo_form() -> FormSchema {
    FormSchema {
        title: "Sorteo",
        fields: vec![
            FieldSpec {
                key: "number",
                label: "Number",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "serie",
                label: "Serie",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "date",
                label: "Date",
                kind: FieldKind::Date,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "loteria",
                label: "Loteria",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
        ],
    }
}

pub fn pattern_form(with_jornada: bool) -> FormSchema {
    let mut fields = vec![FieldSpec {
        key: "date",
        label: "Date",
        kind: FieldKind::Date,
        required: Requirement::Always,
    }];
    if with_jornada {
        fields.push(FieldSpec {
            key: "jornada",
            label: "Jornada",
            kind: FieldKind::Select(JORNADAS),
            required: Requirement::Always,
        });
    }
    fields.push(FieldSpec {
        key: "numbers",
        label: "Frequencies",
        kind: FieldKind::Numbers(10),
        required: Requirement::Always,
    });
    FormSchema {
        title: "Pattern",
        fields,
    }
}

pub fn range_form(with_jornada: bool) -> FormSchema {
    let mut fields = vec![FieldSpec {
        key: "date_init",
        label: "Start date",
        kind: FieldKind::Date,
        required: Requirement::Always,
    }];
    if with_jornada {
        fields.push(FieldSpec {
            key: "jornada_init",
            label: "Start jornada",
            kind: FieldKind::Select(JORNADAS),
            required: Requirement::Always,
        });
    }
    fields.push(FieldSpec {
        key: "date_final",
        label: "End date",
        kind: FieldKind::Date,
        required: Requirement::Always,
    });
    if with_jornada {
        fields.push(FieldSpec {
            key: "jornada_final",
            label: "End jornada",
            kind: FieldKind::Select(JORNADAS),
            required: Requirement::Always,
        });
    }
    FormSchema {
        title: "Calculate range",
        fields,
    }
}

pub fn fdg_form() -> FormSchema {
    FormSchema {
        title: "Search by FDG",
        fields: vec![
            FieldSpec {
                key: "fdg",
                label: "FDG",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "jornada",
                label: "Jornada",
                kind: FieldKind::Select(JORNADAS),
                required: Requirement::Always,
            },
        ],
    }
}

pub fn astro_search_form() -> FormSchema {
    FormSchema {
        title: "Astro search",
        fields: vec![
            FieldSpec {
                key: "date",
                label: "Date",
                kind: FieldKind::Date,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "jornada",
                label: "Jornada",
                kind: FieldKind::Select(ASTRO_JORNADAS),
                required: Requirement::Always,
            },
        ],
    }
}

pub fn upload_form() -> FormSchema {
    FormSchema {
        title: "Upload spreadsheet",
        fields: vec![FieldSpec {
            key: "file",
            label: "File path",
            kind: FieldKind::Text,
            required: Requirement::Always,
        }],
    }
}

pub fn login_form() -> FormSchema {
    FormSchema {
        title: "Login",
        fields: vec![
            FieldSpec {
                key: "user_name",
                label: "User",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "password",
                label: "Password",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
        ],
    }
}

pub fn register_form() -> FormSchema {
    FormSchema {
        title: "Register operator",
        fields: vec![
            FieldSpec {
                key: "user_name",
                label: "User",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
            FieldSpec {
                key: "password",
                label: "Password",
                kind: FieldKind::Text,
                required: Requirement::Always,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_astro_requires_sign() {
        let mut form = FormState::new(ticket_form());
        form.set_value("number", "1234".into());
        form.set_value("date", "2024-05-20".into());
        form.set_value("loteria", "Astro".into());
        form.set_value("jornada", "dia".into());
        form.set_value("sign", "".into());

        assert!(!form.validate());
        assert!(form.error("sign").is_some());

        form.set_value("sign", "Leo".into());
        assert!(form.validate());
    }

    #[test]
    fn test_non_astro_clears_sign() {
        let mut form = FormState::new(ticket_form());
        form.set_value("number", "1234".into());
        form.set_value("date", "2024-05-20".into());
        form.set_value("loteria", "Paisita".into());
        form.set_value("jornada", "dia".into());
        form.set_value("sign", "Leo".into());

        assert!(form.validate());
        assert_eq!(form.value("sign"), "");
    }

    #[test]
    fn test_date_field_must_parse() {
        let mut form = FormState::new(astro_search_form());
        form.set_value("date", "20/05/2024".into());
        assert!(!form.validate());
        assert!(form.error("date").is_some());

        form.set_value("date", "2024-05-20".into());
        assert!(form.validate());
    }

    #[test]
    fn test_numbers_field_wants_exact_count() {
        let mut form = FormState::new(pattern_form(true));
        form.set_value("date", "2024-05-20".into());
        form.set_value("numbers", "1 2 3".into());
        assert!(!form.validate());

        form.set_value("numbers", "3 7 1 0 5 2 9 4 6 8".into());
        assert!(form.validate());
        assert_eq!(form.numbers("numbers"), vec![3, 7, 1, 0, 5, 2, 9, 4, 6, 8]);
    }

    #[test]
    fn test_select_starts_on_first_option_and_cycles() {
        let mut form = FormState::new(ticket_form());
        let loteria_index = 2;
        form.focus = loteria_index;
        assert_eq!(form.value("loteria"), LOTERIAS[0]);

        form.cycle_option(1);
        assert_eq!(form.value("loteria"), LOTERIAS[1]);

        form.cycle_option(-1);
        form.cycle_option(-1);
        assert_eq!(form.value("loteria"), *LOTERIAS.last().unwrap());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::new(login_form());
        assert_eq!(form.focus, 0);
        form.focus_next();
        assert_eq!(form.focus, 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
        form.focus_prev();
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn test_typing_ignored_on_select_fields() {
        let mut form = FormState::new(ticket_form());
        form.focus = 2;
        form.input_char('x');
        assert_eq!(form.value("loteria"), LOTERIAS[0]);
    }

    #[test]
    fn test_failed_validation_keeps_entered_values() {
        let mut form = FormState::new(sorteo_form());
        form.set_value("number", "4821".into());
        assert!(!form.validate());
        // Submission failure re-presents the form with values intact.
        assert_eq!(form.value("number"), "4821");
    }
}
