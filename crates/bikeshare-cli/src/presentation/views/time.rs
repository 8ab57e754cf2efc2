use std::fmt;

use super::NO_DATA;
use crate::presentation::formatters::{format_hour, month_name};
use bikeshare_engine::TimeStats;

pub struct TimeStatsView<'a> {
    data: &'a TimeStats,
}

impl<'a> TimeStatsView<'a> {
    pub fn new(data: &'a TimeStats) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TimeStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.popular_month {
            Some(month) => writeln!(f, "The most popular month was {}", month_name(month))?,
            None => writeln!(f, "The most popular month: {}", NO_DATA)?,
        }
        match self.data.popular_day {
            Some(day) => writeln!(f, "The most popular week day was {}", day)?,
            None => writeln!(f, "The most popular week day: {}", NO_DATA)?,
        }
        match self.data.popular_hour {
            Some(hour) => writeln!(f, "The most popular start hour was {}", format_hour(hour))?,
            None => writeln!(f, "The most popular start hour: {}", NO_DATA)?,
        }
        Ok(())
    }
}
