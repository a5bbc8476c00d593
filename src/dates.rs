//! Calendar date parsing for operator input

use chrono::{Local, NaiveDate};

use crate::error::{ClinicError, Result};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date using a `chrono` format string
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, format).map_err(|source| ClinicError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Parse `input`, falling back to `today` when it is not a valid date.
///
/// The flag is `true` when the fallback was used.
pub fn parse_date_or(input: &str, format: &str, today: NaiveDate) -> (NaiveDate, bool) {
    match parse_date(input, format) {
        Ok(date) => (date, false),
        Err(err) => {
            tracing::debug!("{}, using {}", err, today);
            (today, true)
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date(" 2024-06-01 ", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let err = parse_date("2024-13-01", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidDate { ref input, .. } if input == "2024-13-01"));

        let date = parse_date("01/06/2024", "%d/%m/%Y").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_date_or_falls_back() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            parse_date_or("tomorrow", DEFAULT_DATE_FORMAT, today),
            (today, true)
        );
        assert_eq!(
            parse_date_or("2024-06-01", DEFAULT_DATE_FORMAT, today),
            (NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), false)
        );
    }
}
