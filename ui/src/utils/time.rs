//! Display formatting only. Machine formats (what the backend and form
//! inputs exchange) live in `payloads::time`.

use jiff::civil::DateTime;

const DISPLAY_DATE_FORMAT: &str = "%d %b, %Y";
const DISPLAY_DATETIME_FORMAT: &str = "%d %b, %Y %H:%M";

/// e.g. "19 Jan, 2026"
pub fn display_date(datetime: DateTime) -> String {
    datetime.strftime(DISPLAY_DATE_FORMAT).to_string()
}

/// e.g. "19 Jan, 2026 14:30"
pub fn display_datetime(datetime: DateTime) -> String {
    datetime.strftime(DISPLAY_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::time::parse_sql_datetime;

    #[test]
    fn display_formats() {
        let dt = parse_sql_datetime("2026-01-19 14:30:00").unwrap();
        assert_eq!(display_date(dt), "19 Jan, 2026");
        assert_eq!(display_datetime(dt), "19 Jan, 2026 14:30");
    }
}
