pub mod number;
pub mod time;

pub use number::{format_count, format_minutes, format_quantity};
pub use time::{format_elapsed, format_hour, month_name};
