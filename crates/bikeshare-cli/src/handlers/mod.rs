pub mod filters;
pub mod preview;
pub mod report;
pub mod session;

pub use filters::{FilterCollector, FilterState, Step, collect_filters};
pub use preview::preview_rows;
pub use report::{
    report_duration_stats, report_station_stats, report_time_stats, report_user_stats,
    run_reports,
};
