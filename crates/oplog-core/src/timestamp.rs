//! Display timestamps for log lines.

use chrono::{DateTime, Local};

/// Format used for every log line timestamp (`yyyy-MM-dd HH:mm:ss`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a point in time with second precision.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted for a log line.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};

    use super::*;

    #[test]
    fn test_format_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-07 09:05:01");
    }

    #[test]
    fn test_now_timestamp_parses_back() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
