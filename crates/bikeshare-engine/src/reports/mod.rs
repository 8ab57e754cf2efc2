mod duration;
mod station;
mod time;
mod user;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{Stat, UserStats, user_stats};
