use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses backend timestamps. The backend emits naive ISO-8601 (no offset),
/// which is taken as UTC; RFC 3339 with an offset is also accepted.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.replacen(' ', "T", 1)
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn relative_time(raw: &str, now: DateTime<Utc>) -> Option<String> {
    let then = parse_timestamp(raw)?;
    let secs = (now - then).num_seconds();
    let label = if secs < 60 {
        "just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        format!("{}d ago", secs / 86_400)
    };
    Some(label)
}

pub fn clock_time(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_naive_and_offset_timestamps() {
        let naive = parse_timestamp("2024-05-01T10:30:00.123456").unwrap();
        let offset = parse_timestamp("2024-05-01T10:30:00Z").unwrap();
        assert_eq!(naive.format("%H:%M:%S").to_string(), "10:30:00");
        assert_eq!(offset.format("%H:%M:%S").to_string(), "10:30:00");
        assert!(parse_timestamp("2024-05-01 10:30:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn relative_labels() {
        assert_eq!(relative_time("2024-05-01T11:59:30", now()).as_deref(), Some("just now"));
        assert_eq!(relative_time("2024-05-01T11:45:00", now()).as_deref(), Some("15m ago"));
        assert_eq!(relative_time("2024-05-01T09:00:00", now()).as_deref(), Some("3h ago"));
        assert_eq!(relative_time("2024-04-29T12:00:00", now()).as_deref(), Some("2d ago"));
        // clock skew puts some rows slightly in the future
        assert_eq!(relative_time("2024-05-01T12:00:30", now()).as_deref(), Some("just now"));
    }

    #[test]
    fn clock_time_formats_hours_and_minutes() {
        assert_eq!(clock_time("2024-05-01T09:05:59").as_deref(), Some("09:05"));
        assert_eq!(clock_time(""), None);
    }
}
