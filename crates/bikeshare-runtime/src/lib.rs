pub mod config;
pub mod error;
pub mod loader;

pub use config::{CitySource, ColumnNames, Config, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use loader::{load_table, read_trips, read_trips_from};
