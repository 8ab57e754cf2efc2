use crate::selection::Weekday;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Logical columns of a trip source. Only `Gender` and `BirthYear` are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    StartTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    pub const REQUIRED: [Column; 5] = [
        Column::StartTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
    ];

    pub const OPTIONAL: [Column; 2] = [Column::Gender, Column::BirthYear];

    pub fn is_optional(&self) -> bool {
        Column::OPTIONAL.contains(self)
    }
}

/// One bike trip. Empty text cells are `None` and never count toward aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Seconds
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived calendar month (January = 1)
    pub month: u32,
    /// Derived weekday of `start_time`
    pub day_of_week: Weekday,
    /// Raw source cells in header order, kept for the raw row viewer
    pub fields: Vec<String>,
}

impl TripRecord {
    pub fn new(start_time: NaiveDateTime, trip_duration: f64) -> Self {
        Self {
            start_time,
            trip_duration,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().into(),
            fields: Vec::new(),
        }
    }

    pub fn with_stations(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_station = Some(start.into());
        self.end_station = Some(end.into());
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Hour of day of the trip start, computed on demand.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Start and end station as an ordered pair, when both are present.
    pub fn route(&self) -> Option<(&str, &str)> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

/// Trip records of one city after filtering, plus the shape of their source.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    headers: Vec<String>,
    optional_columns: Vec<Column>,
    records: Vec<TripRecord>,
}

impl TripTable {
    /// `optional_columns` lists which of `Column::OPTIONAL` the source carries.
    pub fn new(headers: Vec<String>, optional_columns: Vec<Column>, records: Vec<TripRecord>) -> Self {
        Self {
            headers,
            optional_columns,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    /// Required columns are always present; optional ones depend on the city.
    pub fn has_column(&self, column: Column) -> bool {
        !column.is_optional() || self.optional_columns.contains(&column)
    }

    /// Keep only the records matching `predicate`, preserving load order.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&TripRecord) -> bool,
    {
        self.records.retain(predicate);
    }

    /// Source headers followed by the derived columns.
    pub fn display_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        headers.push("month".to_string());
        headers.push("day_of_week".to_string());
        headers
    }

    /// Rows `[offset, offset + count)` rendered as text cells; shorter or empty
    /// when the range runs past the end.
    pub fn display_rows(&self, offset: usize, count: usize) -> Vec<Vec<String>> {
        self.records
            .iter()
            .skip(offset)
            .take(count)
            .map(|record| {
                let mut cells = record.fields.clone();
                cells.push(record.month.to_string());
                cells.push(record.day_of_week.to_string());
                cells
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
