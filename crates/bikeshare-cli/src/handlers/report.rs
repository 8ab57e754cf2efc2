use crate::presentation::formatters::format_elapsed;
use crate::presentation::views::{DurationStatsView, StationStatsView, TimeStatsView, UserStatsView};
use crate::ui::Console;
use anyhow::Result;
use bikeshare_engine::{duration_stats, station_stats, time_stats, user_stats};
use bikeshare_types::TripTable;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::debug;

/// Print a banner, compute and render one report, then its timing.
fn timed<R, W, T, V>(
    console: &mut Console<R, W>,
    banner: &str,
    compute: impl FnOnce() -> T,
    view: impl FnOnce(&T) -> V,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    V: Display,
{
    let style = console.style();
    console.say(format!("\n{}\n", style.heading(banner)))?;

    let started = Instant::now();
    let report = compute();
    let rendered = view(&report).to_string();
    let elapsed = started.elapsed();

    console.say(rendered.trim_end())?;
    console.say(style.dimmed(&format!("\nThis took {}.", format_elapsed(elapsed))))?;
    console.say("-".repeat(40))?;
    debug!(report = banner, ?elapsed, "report finished");
    Ok(())
}

pub fn report_time_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    timed(
        console,
        "Calculating The Most Frequent Times of Travel...",
        || time_stats(table),
        |stats| TimeStatsView::new(stats).to_string(),
    )
}

pub fn report_station_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    timed(
        console,
        "Calculating The Most Popular Stations and Trip...",
        || station_stats(table),
        |stats| StationStatsView::new(stats).to_string(),
    )
}

pub fn report_duration_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    timed(
        console,
        "Calculating Trip Duration...",
        || duration_stats(table),
        |stats| DurationStatsView::new(stats).to_string(),
    )
}

pub fn report_user_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    timed(
        console,
        "Calculating User Stats...",
        || user_stats(table),
        |stats| UserStatsView::new(stats).to_string(),
    )
}

/// All four reports: times, stations, durations, then users.
pub fn run_reports<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    report_time_stats(console, table)?;
    report_station_stats(console, table)?;
    report_duration_stats(console, table)?;
    report_user_stats(console, table)
}
