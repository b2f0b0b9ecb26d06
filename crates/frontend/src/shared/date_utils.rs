//! Date helpers shared by the filter controls and tables.

use chrono::NaiveDate;

/// Display format used throughout the tables: `15-03-2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Parses the `yyyy-mm-dd` value of an `<input type="date">`. Empty or
/// malformed input means "no date picked".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Value for an `<input type="date">` from an optional date.
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(format_date(d), "15-03-2025");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2025-03-15"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15/03/2025"), None);
    }

    #[test]
    fn test_input_value_round_trip() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 15);
        assert_eq!(input_value(d), "2025-03-15");
        assert_eq!(parse_input_date(&input_value(d)), d);
        assert_eq!(input_value(None), "");
    }
}
