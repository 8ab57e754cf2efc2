use bikeshare_types::TripTable;

/// Total and mean trip duration in minutes; `None` for an empty table.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total_minutes: Option<f64>,
    pub mean_minutes: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let trips = table.len();
    if trips == 0 {
        return DurationStats {
            trips,
            total_minutes: None,
            mean_minutes: None,
        };
    }

    let total_seconds: f64 = table.iter().map(|trip| trip.trip_duration).sum();
    DurationStats {
        trips,
        total_minutes: Some(total_seconds / 60.0),
        mean_minutes: Some(total_seconds / trips as f64 / 60.0),
    }
}
