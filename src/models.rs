//! Domain models mirrored from the Chances API
//!
//! Records are flat serde structs, camelCase on the wire. Validation is
//! limited to the few client-side rules the forms enforce; everything
//! else is the server's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ChancesError, Result};

/// Loteria options offered by the ticket form.
pub const LOTERIAS: &[&str] = &[
    "Antioqueñita",
    "Paisita",
    "Chontico",
    "Caribeña",
    "Motilon",
    "Astro",
    "Pijao",
    "Dorado",
    "Culona",
    "Saman",
    "Fantastica",
    "Cash3",
    "Play4",
    "Sinuano",
];

/// Shift options for chance tickets and patterns.
pub const JORNADAS: &[&str] = &["dia", "tarde", "noche"];

/// Shift options for astro draws.
pub const ASTRO_JORNADAS: &[&str] = &["Sol", "Luna"];

/// Zodiac signs in the order the astro histogram reports them.
pub const ZODIAC_SIGNS: &[&str] = &[
    "Leo",
    "Virgo",
    "Libra",
    "Escorpio",
    "Sagitario",
    "Capricornio",
    "Acuario",
    "Piscis",
    "Aries",
    "Tauro",
    "Geminis",
    "Cancer",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub is_success: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub roles: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default)]
    pub id: i64,
    pub number: String,
    pub date: NaiveDate,
    pub loteria: String,
    pub jornada: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorteo {
    #[serde(default)]
    pub id: i64,
    pub number: String,
    pub serie: String,
    pub date: NaiveDate,
    pub loteria: String,
}

/// A digit-frequency histogram over ticket numbers for one date+shift.
/// `patron_numbers` has one slot per digit 0 through 9.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub jornada: String,
    pub patron_numbers: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdg: Option<String>,
}

/// Histogram over sorteo draws; no jornada dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SorteoPattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub patron_numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronRedundancy {
    pub patron: Pattern,
    pub redundancy_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SorteoPatronRedundancy {
    pub patron: SorteoPattern,
    pub redundancy_count: u32,
}

/// Zodiac-sign histogram (12 slots) plus four row histograms (10 slots each).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstroPatron {
    pub id: i64,
    pub date: NaiveDate,
    pub jornada: String,
    pub sign: Vec<u32>,
    pub row1: Vec<u32>,
    pub row2: Vec<u32>,
    pub row3: Vec<u32>,
    pub row4: Vec<u32>,
}

/// Pairwise comparison between two patterns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedundancyAnalysis {
    pub patron: Pattern,
    pub numbers_to_search: Vec<u32>,
    #[serde(default)]
    pub tickets_con4_coincidencias: Vec<Ticket>,
    #[serde(default)]
    pub tickets_con3_coincidencias: Vec<Ticket>,
}

impl Ticket {
    /// Form-level validation. The sign field only exists for Astro
    /// tickets; any other loteria submits with the sign cleared.
    pub fn validate(&mut self) -> Result<()> {
        if self.number.trim().is_empty() {
            return Err(ChancesError::validation("number is required"));
        }
        if self.loteria.trim().is_empty() {
            return Err(ChancesError::validation("loteria is required"));
        }
        if self.jornada.trim().is_empty() {
            return Err(ChancesError::validation("jornada is required"));
        }
        if self.loteria == "Astro" {
            if self.sign.as_deref().map(str::trim).unwrap_or("").is_empty() {
                return Err(ChancesError::validation(
                    "sign is required when loteria is Astro",
                ));
            }
        } else {
            self.sign = None;
        }
        Ok(())
    }
}

impl Sorteo {
    pub fn validate(&self) -> Result<()> {
        if self.number.trim().is_empty() {
            return Err(ChancesError::validation("number is required"));
        }
        if self.serie.trim().is_empty() {
            return Err(ChancesError::validation("serie is required"));
        }
        if self.loteria.trim().is_empty() {
            return Err(ChancesError::validation("loteria is required"));
        }
        Ok(())
    }
}

/// Window of tickets generated by a pattern at (date, jornada).
///
/// A dia pattern generates the same day's noche tickets; a noche pattern
/// generates the next day's dia tickets.
pub fn generated_window(date: NaiveDate, jornada: &str) -> (NaiveDate, &'static str) {
    if jornada.eq_ignore_ascii_case("noche") {
        (date + chrono::Days::new(1), "dia")
    } else {
        (date, "noche")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(loteria: &str, sign: Option<&str>) -> Ticket {
        Ticket {
            id: 0,
            number: "1234".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            loteria: loteria.into(),
            jornada: "dia".into(),
            sign: sign.map(String::from),
        }
    }

    #[test]
    fn test_astro_ticket_requires_sign() {
        let mut t = ticket("Astro", None);
        assert!(t.validate().is_err());

        let mut t = ticket("Astro", Some(""));
        assert!(t.validate().is_err());

        let mut t = ticket("Astro", Some("Leo"));
        assert!(t.validate().is_ok());
        assert_eq!(t.sign.as_deref(), Some("Leo"));
    }

    #[test]
    fn test_non_astro_ticket_clears_sign() {
        let mut t = ticket("Paisita", Some("Leo"));
        assert!(t.validate().is_ok());
        assert!(t.sign.is_none());
    }

    #[test]
    fn test_ticket_requires_number() {
        let mut t = ticket("Paisita", None);
        t.number = "  ".into();
        assert!(matches!(t.validate(), Err(ChancesError::Validation(_))));
    }

    #[test]
    fn test_sorteo_requires_number_and_serie() {
        let sorteo = Sorteo {
            id: 0,
            number: "4821".into(),
            serie: "".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            loteria: "Boyaca".into(),
        };
        assert!(sorteo.validate().is_err());
    }

    #[test]
    fn test_generated_window_succession() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(generated_window(d, "dia"), (d, "noche"));
        assert_eq!(
            generated_window(d, "noche"),
            (NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(), "dia")
        );
    }

    #[test]
    fn test_pattern_wire_format_is_camel_case() {
        let pattern = Pattern {
            id: Some(7),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            jornada: "dia".into(),
            patron_numbers: vec![3, 7, 1, 0, 5, 2, 9, 4, 6, 8],
            fdg: Some("37".into()),
        };
        let json = serde_json::to_value(&pattern).unwrap();
        assert!(json.get("patronNumbers").is_some());
        assert!(json.get("patron_numbers").is_none());
    }

    #[test]
    fn test_login_response_deserializes() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"isSuccess":true,"token":"abc","roles":0}"#).unwrap();
        assert!(resp.is_success);
        assert_eq!(resp.roles, 0);
    }

    #[test]
    fn test_zodiac_sign_count() {
        assert_eq!(ZODIAC_SIGNS.len(), 12);
    }
}
