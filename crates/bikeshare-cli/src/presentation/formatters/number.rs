/// Group the integer digits with commas: 1234567 -> "1,234,567".
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_count(count: usize) -> String {
    group_digits(&count.to_string())
}

/// Count with its noun: "1 trip", "2,500 trips".
pub fn format_quantity(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{}", format_count(count), noun, suffix)
}

/// Minutes rounded to two decimals, trailing zeros dropped but at least one
/// decimal kept: 6.0 -> "6.0", 2.25 -> "2.25", 12345.678 -> "12,345.68".
pub fn format_minutes(minutes: f64) -> String {
    let fixed = format!("{:.2}", minutes.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let frac = frac_part.trim_end_matches('0');
    let frac = if frac.is_empty() { "0" } else { frac };
    let sign = if minutes < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_digits(int_part), frac)
}
