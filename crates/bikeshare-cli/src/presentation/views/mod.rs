mod duration;
mod rows;
mod station;
mod time;
mod user;

pub use duration::DurationStatsView;
pub use rows::RowsView;
pub use station::StationStatsView;
pub use time::TimeStatsView;
pub use user::UserStatsView;

pub const NO_DATA: &str = "no data for the selected filters";
pub const NOT_AVAILABLE: &str = "data not available for this city";
