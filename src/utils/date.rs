use chrono::{DateTime, NaiveDate, Utc};

/// Formats a date as `M/D/YYYY`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parses either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_format_short_date() {
        assert_eq!(
            format_short_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            "1/1/2024"
        );
    }

    #[rstest]
    #[case::plain_date("2024-01-01", Some((2024, 1, 1)))]
    #[case::timestamp("2024-05-17T08:12:45.120Z", Some((2024, 5, 17)))]
    #[case::timestamp_with_offset("2024-05-17T23:30:00-02:00", Some((2024, 5, 18)))]
    #[case::garbage("last tuesday", None)]
    #[case::empty("", None)]
    fn test_parse_loose_date(#[case] value: &str, #[case] expected: Option<(i32, u32, u32)>) {
        assert_eq!(
            parse_loose_date(value),
            expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        );
    }
}
