// Engine module - aggregate statistics over a filtered trip table.
// Every report borrows the table immutably, so running one twice yields the same values.

pub mod frequency;
pub mod reports;

pub use frequency::{first_mode, value_counts};
pub use reports::{
    DurationStats, Stat, StationStats, TimeStats, UserStats, duration_stats, station_stats,
    time_stats, user_stats,
};
