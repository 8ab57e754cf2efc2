//! Table loader: reads a city's CSV into a [`TripTable`] and applies the
//! month/day filters of a [`FilterSelection`].
//!
//! Any unusable required cell fails the whole load.

use crate::config::{ColumnNames, Config};
use crate::{Error, Result};
use bikeshare_types::{Column, FilterSelection, TripRecord, TripTable};
use chrono::NaiveDateTime;
use std::io;
use std::path::Path;
use tracing::debug;

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Load the selected city's trips and keep the rows matching the selection.
pub fn load_table(config: &Config, selection: &FilterSelection) -> Result<TripTable> {
    let path = config.source_path(selection.city);
    debug!(city = %selection.city, path = %path.display(), "loading trip data");

    let mut table = read_trips(&path, &config.columns).inspect_err(|err| {
        debug!(city = %selection.city, "failed to load trip data: {}", err);
    })?;
    let total = table.len();

    if !selection.month.is_all() {
        table.retain(|record| selection.month.accepts(record.month));
    }
    if !selection.day.is_all() {
        table.retain(|record| selection.day.accepts(record.day_of_week));
    }

    debug!(
        total,
        kept = table.len(),
        month = %selection.month,
        day = %selection.day,
        "applied filters"
    );
    Ok(table)
}

/// Read every row of the CSV at `path`.
pub fn read_trips(path: &Path, columns: &ColumnNames) -> Result<TripTable> {
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    parse_trips(reader, path, columns)
}

/// Read every row of CSV data from `reader`; `origin` only labels errors.
pub fn read_trips_from<R: io::Read>(
    reader: R,
    origin: &Path,
    columns: &ColumnNames,
) -> Result<TripTable> {
    parse_trips(csv::Reader::from_reader(reader), origin, columns)
}

/// Header positions of the logical columns.
struct ColumnIndex {
    start_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &[String], columns: &ColumnNames, origin: &Path) -> Result<Self> {
        let find = |column: Column| {
            let name = columns.name(column);
            headers.iter().position(|header| header.trim() == name)
        };
        let require = |column: Column| {
            find(column).ok_or_else(|| {
                Error::data_source(
                    origin,
                    format!("missing required column '{}'", columns.name(column)),
                )
            })
        };

        Ok(Self {
            start_time: require(Column::StartTime)?,
            trip_duration: require(Column::TripDuration)?,
            start_station: require(Column::StartStation)?,
            end_station: require(Column::EndStation)?,
            user_type: require(Column::UserType)?,
            gender: find(Column::Gender),
            birth_year: find(Column::BirthYear),
        })
    }

    fn optional_columns(&self) -> Vec<Column> {
        let mut present = Vec::new();
        if self.gender.is_some() {
            present.push(Column::Gender);
        }
        if self.birth_year.is_some() {
            present.push(Column::BirthYear);
        }
        present
    }
}

fn parse_trips<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin: &Path,
    columns: &ColumnNames,
) -> Result<TripTable> {
    let csv_error = |source| Error::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(String::from)
        .collect();
    let index = ColumnIndex::resolve(&headers, columns, origin)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let row_number = i + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let start_time = parse_timestamp(cell(index.start_time)).ok_or_else(|| {
            Error::data_source(
                origin,
                format!(
                    "row {}: unparsable {} '{}'",
                    row_number,
                    columns.start_time,
                    cell(index.start_time)
                ),
            )
        })?;
        let trip_duration = parse_duration(cell(index.trip_duration)).ok_or_else(|| {
            Error::data_source(
                origin,
                format!(
                    "row {}: unparsable {} '{}'",
                    row_number,
                    columns.trip_duration,
                    cell(index.trip_duration)
                ),
            )
        })?;
        let birth_year = match index.birth_year.map(cell) {
            Some(value) => parse_birth_year(value).map_err(|_| {
                Error::data_source(
                    origin,
                    format!(
                        "row {}: unparsable {} '{}'",
                        row_number, columns.birth_year, value
                    ),
                )
            })?,
            None => None,
        };

        let mut record = TripRecord::new(start_time, trip_duration)
            .with_fields(row.iter().map(String::from).collect());
        record.start_station = text(cell(index.start_station));
        record.end_station = text(cell(index.end_station));
        record.user_type = text(cell(index.user_type));
        record.gender = index.gender.map(cell).and_then(text);
        record.birth_year = birth_year;
        records.push(record);
    }

    debug!(path = %origin.display(), rows = records.len(), "read trip rows");
    Ok(TripTable::new(headers, index.optional_columns(), records))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn parse_duration(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

/// Empty cells are missing; `1989` and `1989.0` are both accepted.
fn parse_birth_year(value: &str) -> std::result::Result<Option<i32>, ()> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(year) = value.parse::<i32>() {
        return Ok(Some(year));
    }
    match value.parse::<f64>() {
        Ok(year) if year.is_finite() && year.fract() == 0.0 => Ok(Some(year as i32)),
        Ok(year) if year.is_nan() => Ok(None),
        _ => Err(()),
    }
}

fn text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
