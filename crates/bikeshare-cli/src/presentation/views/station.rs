use std::fmt;

use super::NO_DATA;
use bikeshare_engine::StationStats;

/// Separator between start and end station of a trip
pub const ROUTE_SEPARATOR: &str = " - ";

pub struct StationStatsView<'a> {
    data: &'a StationStats,
}

impl<'a> StationStatsView<'a> {
    pub fn new(data: &'a StationStats) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for StationStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.start_station {
            Some(station) => writeln!(f, "The most popular start station was {}", station)?,
            None => writeln!(f, "The most popular start station: {}", NO_DATA)?,
        }
        match &self.data.end_station {
            Some(station) => writeln!(f, "The most popular end station was {}", station)?,
            None => writeln!(f, "The most popular end station: {}", NO_DATA)?,
        }
        match &self.data.route {
            Some((start, end)) => writeln!(
                f,
                "The most common trip was {}{}{}",
                start, ROUTE_SEPARATOR, end
            )?,
            None => writeln!(f, "The most common trip: {}", NO_DATA)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stations() {
        let stats = StationStats {
            start_station: Some("A".to_string()),
            end_station: Some("B".to_string()),
            route: Some(("A".to_string(), "B".to_string())),
        };

        insta::assert_snapshot!(StationStatsView::new(&stats).to_string(), @r"
        The most popular start station was A
        The most popular end station was B
        The most common trip was A - B
        ");
    }

    #[test]
    fn test_render_no_data() {
        let stats = StationStats {
            start_station: None,
            end_station: None,
            route: None,
        };

        let rendered = StationStatsView::new(&stats).to_string();
        assert_eq!(rendered.matches(NO_DATA).count(), 3);
    }
}
