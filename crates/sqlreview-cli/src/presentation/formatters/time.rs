use chrono::{DateTime, Local, Utc};
use sqlreview_types::Timestamp;

/// Local wall-clock time, minute precision
pub fn format_local(ts: &Timestamp) -> String {
    ts.as_datetime()
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn format_local_opt(ts: Option<&Timestamp>) -> String {
    ts.map(format_local).unwrap_or_else(|| "-".to_string())
}

/// Format a timestamp as relative time ("2 min ago", "yesterday")
pub fn format_relative(ts: &Timestamp) -> String {
    format_relative_to(ts.as_datetime(), Utc::now())
}

fn format_relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(then);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative_to(now - Duration::seconds(5), now), "just now");
        assert_eq!(format_relative_to(now - Duration::minutes(12), now), "12 min ago");
        assert_eq!(format_relative_to(now - Duration::hours(30), now), "yesterday");
        assert_eq!(format_relative_to(now - Duration::days(15), now), "2 weeks ago");
    }

    #[test]
    fn test_missing_timestamp_is_dash() {
        assert_eq!(format_local_opt(None), "-");
    }
}
