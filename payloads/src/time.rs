//! Conversions between the date/time representations the dashboard touches:
//! ISO calendar dates (`2026-01-19`), `datetime-local` input values
//! (`2026-01-19T14:30`), and the backend's SQL-style timestamps
//! (`2026-01-19 14:30:00`).
//!
//! Parsing is total: malformed or empty input yields `None`, never an
//! error. Only these machine formats are ever transmitted — display
//! formatting lives in the UI and stays there.

use jiff::civil::{Date, DateTime};

pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_sql_datetime(value: &str) -> Option<DateTime> {
    DateTime::strptime(SQL_DATETIME_FORMAT, value.trim()).ok()
}

pub fn to_sql_datetime(datetime: DateTime) -> String {
    datetime.strftime(SQL_DATETIME_FORMAT).to_string()
}

pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::strptime(ISO_DATE_FORMAT, value.trim()).ok()
}

pub fn to_iso_date(date: Date) -> String {
    date.strftime(ISO_DATE_FORMAT).to_string()
}

/// Parse the value of an `<input type="datetime-local">`. Seconds are
/// accepted when the browser includes them.
pub fn parse_datetime_local(value: &str) -> Option<DateTime> {
    let value = value.trim();
    DateTime::strptime(DATETIME_LOCAL_FORMAT, value)
        .or_else(|_| DateTime::strptime("%Y-%m-%dT%H:%M:%S", value))
        .ok()
}

pub fn to_datetime_local(datetime: DateTime) -> String {
    datetime.strftime(DATETIME_LOCAL_FORMAT).to_string()
}

/// Serde adapter for fields the backend exchanges as SQL-style timestamps.
pub mod sql_datetime {
    use jiff::civil::DateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        datetime: &DateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_sql_datetime(*datetime))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_sql_datetime(&value).ok_or_else(|| {
            de::Error::custom(format!("invalid timestamp: {value:?}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_datetime_round_trip() {
        for raw in ["2026-01-19 14:30:00", "2025-12-31 00:00:59"] {
            let parsed = parse_sql_datetime(raw).unwrap();
            assert_eq!(to_sql_datetime(parsed), raw);
        }
    }

    #[test]
    fn malformed_input_yields_none() {
        for raw in ["", "  ", "not a date", "2026-13-40 99:99:99", "2026-01-19"]
        {
            assert_eq!(parse_sql_datetime(raw), None);
        }
        assert_eq!(parse_iso_date("19/01/2026"), None);
        assert_eq!(parse_datetime_local("19 Jan, 2026"), None);
    }

    #[test]
    fn iso_date_round_trip() {
        let parsed = parse_iso_date("2026-01-19").unwrap();
        assert_eq!(to_iso_date(parsed), "2026-01-19");
    }

    #[test]
    fn datetime_local_round_trip() {
        let parsed = parse_datetime_local("2026-01-19T14:30").unwrap();
        assert_eq!(to_datetime_local(parsed), "2026-01-19T14:30");
        // Browsers may include seconds; they parse but are not re-emitted.
        assert!(parse_datetime_local("2026-01-19T14:30:15").is_some());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(parse_sql_datetime(" 2026-01-19 14:30:00 ").is_some());
    }
}
