//! Enumerated user selections: city, month, weekday and the filter triple.
//!
//! Every selection is matched case-insensitively after trimming, compared in
//! lower case and displayed in title case.

use crate::error::{Error, Result, SelectionKind};
use std::fmt;
use std::str::FromStr;

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn invalid(kind: SelectionKind, input: &str) -> Error {
    Error::InvalidSelection {
        kind,
        input: input.trim().to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Canonical lower-case name, the only accepted spelling (modulo case).
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Default CSV file name for this city's trips.
    pub fn default_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize(input);
        City::ALL
            .into_iter()
            .find(|city| city.key() == normalized)
            .ok_or_else(|| invalid(SelectionKind::City, input))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        City::parse(s)
    }
}

/// The six months covered by the trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar number (January = 1).
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Either every value or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

pub type MonthFilter = Filter<Month>;
pub type DayFilter = Filter<Weekday>;

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl Filter<Month> {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize(input);
        if normalized == "all" {
            return Ok(Filter::All);
        }
        Month::ALL
            .into_iter()
            .find(|month| month.key() == normalized)
            .map(Filter::Only)
            .ok_or_else(|| invalid(SelectionKind::Month, input))
    }

    /// Whether a derived calendar month number passes this filter.
    pub fn accepts(&self, month_number: u32) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(month) => month.number() == month_number,
        }
    }
}

impl Filter<Weekday> {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize(input);
        if normalized == "all" {
            return Ok(Filter::All);
        }
        Weekday::ALL
            .into_iter()
            .find(|day| day.key() == normalized)
            .map(Filter::Only)
            .ok_or_else(|| invalid(SelectionKind::Day, input))
    }

    pub fn accepts(&self, day: Weekday) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(only) => *only == day,
        }
    }
}

/// A fully validated (city, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection covering every row of a city.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, Filter::All, Filter::All)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / month: {} / day: {}", self.city, self.month, self.day)
    }
}
