//! Date parsing and formatting in the API's `yyyy-MM-dd` convention.

use chrono::{Local, NaiveDate};

use crate::errors::{ChancesError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| ChancesError::date_parse(format!("{}: expected yyyy-MM-dd ({})", input, e)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        let date = parse_date("2024-05-20").unwrap();
        assert_eq!(format_date(date), "2024-05-20");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date("  2024-05-20 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_date("20/05/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
