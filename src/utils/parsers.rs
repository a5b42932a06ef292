use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a backend decimal string, defaulting to zero on absent or
/// malformed input. Monetary fields must never surface NaN or a panic.
pub fn parse_decimal(value: Option<&str>) -> Decimal {
    parse_decimal_opt(value).unwrap_or_default()
}

/// Like [`parse_decimal`] but keeps absence observable.
pub fn parse_decimal_opt(value: Option<&str>) -> Option<Decimal> {
    value.and_then(|s| Decimal::from_str(s.trim()).ok())
}

/// Parses an ISO-8601 timestamp; absent or malformed input becomes `None`.
pub fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses an ISO-8601 date, accepting either a plain date or a full
/// timestamp. Absent or malformed input becomes `None`, never an invalid
/// date.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_defaults_to_zero() {
        assert_eq!(parse_decimal(Some("1234.56")), dec!(1234.56));
        assert_eq!(parse_decimal(Some("not-a-number")), Decimal::ZERO);
        assert_eq!(parse_decimal(None), Decimal::ZERO);
    }

    #[test]
    fn decimal_opt_keeps_absence() {
        assert_eq!(parse_decimal_opt(Some("0.07")), Some(dec!(0.07)));
        assert_eq!(parse_decimal_opt(Some("")), None);
        assert_eq!(parse_decimal_opt(None), None);
    }

    #[test]
    fn date_accepts_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date(Some("2024-03-15")), Some(expected));
        assert_eq!(parse_date(Some("2024-03-15T10:30:00Z")), Some(expected));
        assert_eq!(parse_date(Some("15/03/2024")), None);
        assert_eq!(parse_date(None), None);
    }

    #[test]
    fn datetime_rejects_garbage() {
        assert!(parse_datetime(Some("2024-03-15T10:30:00Z")).is_some());
        assert!(parse_datetime(Some("yesterday")).is_none());
    }
}
