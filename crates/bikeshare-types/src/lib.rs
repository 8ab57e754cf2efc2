pub mod error;
pub mod selection;
pub mod trip;

pub use error::{Error, Result, SelectionKind};
pub use selection::{City, DayFilter, Filter, FilterSelection, Month, MonthFilter, Weekday};
pub use trip::{Column, TripRecord, TripTable};
