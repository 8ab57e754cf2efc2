use crate::frequency::first_mode;
use bikeshare_types::{TripTable, Weekday};

/// Most frequent times of travel. `None` means the table had no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number (January = 1)
    pub popular_month: Option<u32>,
    pub popular_day: Option<Weekday>,
    /// Hour of day, 0-23
    pub popular_hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    TimeStats {
        popular_month: first_mode(table.iter().map(|trip| trip.month)),
        popular_day: first_mode(table.iter().map(|trip| trip.day_of_week)),
        popular_hour: first_mode(table.iter().map(|trip| trip.hour())),
    }
}
