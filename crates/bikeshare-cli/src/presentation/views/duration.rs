use std::fmt;

use super::NO_DATA;
use crate::presentation::formatters::{format_count, format_minutes};
use bikeshare_engine::DurationStats;

pub struct DurationStatsView<'a> {
    data: &'a DurationStats,
}

impl<'a> DurationStatsView<'a> {
    pub fn new(data: &'a DurationStats) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DurationStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trips in the selected period: {}", format_count(self.data.trips))?;
        match self.data.total_minutes {
            Some(total) => writeln!(
                f,
                "The total trip duration of the selected period was {} min",
                format_minutes(total)
            )?,
            None => writeln!(f, "The total trip duration: {}", NO_DATA)?,
        }
        match self.data.mean_minutes {
            Some(mean) => writeln!(
                f,
                "The mean trip duration of the selected period was {} min",
                format_minutes(mean)
            )?,
            None => writeln!(f, "The mean trip duration: {}", NO_DATA)?,
        }
        Ok(())
    }
}
