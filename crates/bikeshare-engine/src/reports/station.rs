use crate::frequency::first_mode;
use bikeshare_types::TripTable;

/// Most popular stations and trip. `None` means no row carried the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Most frequent (start, end) pair
    pub route: Option<(String, String)>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let start_station = first_mode(table.iter().filter_map(|trip| trip.start_station.as_deref()));
    let end_station = first_mode(table.iter().filter_map(|trip| trip.end_station.as_deref()));
    // Counted as (start, end) tuples; station names may contain the display separator.
    let route = first_mode(table.iter().filter_map(|trip| trip.route()));

    StationStats {
        start_station: start_station.map(String::from),
        end_station: end_station.map(String::from),
        route: route.map(|(start, end)| (start.to_string(), end.to_string())),
    }
}
