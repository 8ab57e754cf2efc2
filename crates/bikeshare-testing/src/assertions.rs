//! Custom assertions over the CLI's report output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Report banners appear, and in order
//! - Line-level lookups that ignore the timing lines

use anyhow::{Context, Result};

pub const REPORT_BANNERS: [&str; 4] = [
    "Calculating The Most Frequent Times of Travel...",
    "Calculating The Most Popular Stations and Trip...",
    "Calculating Trip Duration...",
    "Calculating User Stats...",
];

/// Assert that `needles` occur in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) -> Result<()> {
    let mut from = 0;
    for needle in needles {
        let found = haystack[from..]
            .find(needle)
            .with_context(|| format!("Expected '{}' after byte {}", needle, from))?;
        from += found + needle.len();
    }
    Ok(())
}

/// Assert that every report ran `sessions` times, in report order.
pub fn assert_reports_ran(stdout: &str, sessions: usize) -> Result<()> {
    for banner in REPORT_BANNERS {
        let count = stdout.matches(banner).count();
        if count != sessions {
            anyhow::bail!("Expected '{}' {} times, got {}", banner, sessions, count);
        }
    }
    assert_in_order(stdout, &REPORT_BANNERS)
}

/// Return the first line that starts with `prefix`, trimmed.
pub fn line_starting_with<'a>(stdout: &'a str, prefix: &str) -> Result<&'a str> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(prefix))
        .with_context(|| format!("No line starts with '{}'", prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_in_order() {
        assert!(assert_in_order("a b c", &["a", "c"]).is_ok());
        assert!(assert_in_order("a b c", &["c", "a"]).is_err());
    }

    #[test]
    fn test_line_starting_with() {
        let text = "one\n  two three\n";
        assert_eq!(line_starting_with(text, "two").unwrap(), "two three");
        assert!(line_starting_with(text, "four").is_err());
    }
}
