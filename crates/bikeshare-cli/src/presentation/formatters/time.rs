use std::time::Duration;

/// English month name for a 1-based month number, or the number itself when
/// out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

/// "17" -> "17 (5 PM)"
pub fn format_hour(hour: u32) -> String {
    let (twelve, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{} ({} {})", hour, twelve, suffix)
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6} seconds", elapsed.as_secs_f64())
}
