use chrono::{DateTime, Utc};

/// Relative age label such as "just now" or "3 minutes ago".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }

    let weeks = days / 7;
    if weeks < 4 {
        return plural(weeks, "week");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(days / 365, "year")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {} ago", n, unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
