use std::fmt;

use super::{NO_DATA, NOT_AVAILABLE};
use crate::presentation::formatters::format_count;
use bikeshare_engine::{Stat, UserStats};

pub struct UserStatsView<'a> {
    data: &'a UserStats,
}

impl<'a> UserStatsView<'a> {
    pub fn new(data: &'a UserStats) -> Self {
        Self { data }
    }
}

fn write_counts(f: &mut fmt::Formatter, label: &str, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "{}: {}", label, NO_DATA);
    }

    let name_width = counts
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let formatted: Vec<String> = counts.iter().map(|(_, count)| format_count(*count)).collect();
    let count_width = formatted.iter().map(String::len).max().unwrap_or(0);

    writeln!(f, "{}:", label)?;
    for ((name, _), count) in counts.iter().zip(&formatted) {
        writeln!(
            f,
            "  {:<name_width$}  {:>count_width$}",
            name,
            count,
            name_width = name_width,
            count_width = count_width
        )?;
    }
    Ok(())
}

fn write_year(f: &mut fmt::Formatter, stat: &Stat<i32>, label: &str, sentence: &str) -> fmt::Result {
    match stat {
        Stat::Value(year) => writeln!(f, "{} {}", sentence, year),
        Stat::NoData => writeln!(f, "{}: {}", label, NO_DATA),
        Stat::Unavailable => writeln!(f, "{}: {}", label, NOT_AVAILABLE),
    }
}

impl<'a> fmt::Display for UserStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User types", &self.data.user_types)?;

        match &self.data.genders {
            Stat::Value(counts) => write_counts(f, "Gender", counts)?,
            Stat::NoData => writeln!(f, "Gender: {}", NO_DATA)?,
            Stat::Unavailable => writeln!(f, "Gender: {}", NOT_AVAILABLE)?,
        }

        write_year(
            f,
            &self.data.earliest_birth_year,
            "Earliest birth year",
            "The oldest user was born in",
        )?;
        write_year(
            f,
            &self.data.latest_birth_year,
            "Latest birth year",
            "The youngest user was born in",
        )?;
        write_year(
            f,
            &self.data.common_birth_year,
            "Most common birth year",
            "The most common birth year is",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_demographics() {
        let stats = UserStats {
            user_types: vec![("Subscriber".to_string(), 2_341), ("Customer".to_string(), 87)],
            genders: Stat::Value(vec![("Male".to_string(), 1_720), ("Female".to_string(), 598)]),
            earliest_birth_year: Stat::Value(1899),
            latest_birth_year: Stat::Value(2001),
            common_birth_year: Stat::Value(1989),
        };

        insta::assert_snapshot!(UserStatsView::new(&stats).to_string(), @r"
        User types:
          Subscriber  2,341
          Customer       87
        Gender:
          Male    1,720
          Female    598
        The oldest user was born in 1899
        The youngest user was born in 2001
        The most common birth year is 1989
        ");
    }

    #[test]
    fn test_render_city_without_demographics() {
        let stats = UserStats {
            user_types: vec![("Registered".to_string(), 2), ("Casual".to_string(), 1)],
            genders: Stat::Unavailable,
            earliest_birth_year: Stat::Unavailable,
            latest_birth_year: Stat::Unavailable,
            common_birth_year: Stat::Unavailable,
        };

        insta::assert_snapshot!(UserStatsView::new(&stats).to_string(), @r"
        User types:
          Registered  2
          Casual      1
        Gender: data not available for this city
        Earliest birth year: data not available for this city
        Latest birth year: data not available for this city
        Most common birth year: data not available for this city
        ");
    }

    #[test]
    fn test_non_ascii_names_stay_aligned() {
        let stats = UserStats {
            user_types: vec![("Abonné".to_string(), 12), ("Client".to_string(), 3)],
            genders: Stat::NoData,
            earliest_birth_year: Stat::NoData,
            latest_birth_year: Stat::NoData,
            common_birth_year: Stat::NoData,
        };

        let rendered = UserStatsView::new(&stats).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "  Abonné  12");
        assert_eq!(lines[2], "  Client   3");
    }

    #[test]
    fn test_render_empty_table() {
        let stats = UserStats {
            user_types: Vec::new(),
            genders: Stat::NoData,
            earliest_birth_year: Stat::NoData,
            latest_birth_year: Stat::NoData,
            common_birth_year: Stat::NoData,
        };

        let rendered = UserStatsView::new(&stats).to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.lines().all(|line| line.ends_with(NO_DATA)));
    }
}
