//! Filter collection as an explicit state machine:
//! AwaitingCity -> AwaitingMonth -> AwaitingDay -> Done.
//!
//! [`FilterCollector`] is pure (answer in, [`Step`] out); [`collect_filters`]
//! drives it over a [`Console`].

use crate::ui::Console;
use anyhow::Result;
use bikeshare_types::{
    City, DayFilter, FilterSelection, Month, MonthFilter, SelectionKind, Weekday,
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    AwaitingCity,
    AwaitingMonth { city: City },
    AwaitingDay { city: City, month: MonthFilter },
    Done(FilterSelection),
}

/// Result of feeding one answer to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Answer accepted; carries the echo shown to the user
    Accepted(String),
    /// Answer rejected; the same question must be asked again
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct FilterCollector {
    state: FilterState,
}

impl Default for FilterCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterCollector {
    pub fn new() -> Self {
        Self {
            state: FilterState::AwaitingCity,
        }
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn selection(&self) -> Option<FilterSelection> {
        match self.state {
            FilterState::Done(selection) => Some(selection),
            _ => None,
        }
    }

    /// Question for the current state; `None` once every filter is set.
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            FilterState::AwaitingCity => Some(city_prompt()),
            FilterState::AwaitingMonth { .. } => Some(month_prompt()),
            FilterState::AwaitingDay { .. } => Some(day_prompt()),
            FilterState::Done(_) => None,
        }
    }

    pub fn feed(&mut self, input: &str) -> Step {
        match self.state {
            FilterState::AwaitingCity => match City::parse(input) {
                Ok(city) => {
                    self.state = FilterState::AwaitingMonth { city };
                    Step::Accepted(format!("The chosen city was {}", city))
                }
                Err(_) => rejected(SelectionKind::City),
            },
            FilterState::AwaitingMonth { city } => match MonthFilter::parse(input) {
                Ok(month) => {
                    self.state = FilterState::AwaitingDay { city, month };
                    Step::Accepted(format!("The chosen month was {}", month))
                }
                Err(_) => rejected(SelectionKind::Month),
            },
            FilterState::AwaitingDay { city, month } => match DayFilter::parse(input) {
                Ok(day) => {
                    self.state = FilterState::Done(FilterSelection::new(city, month, day));
                    Step::Accepted(format!("The chosen day was {}", day))
                }
                Err(_) => rejected(SelectionKind::Day),
            },
            FilterState::Done(_) => Step::Rejected("Filters are already complete".to_string()),
        }
    }
}

fn rejected(kind: SelectionKind) -> Step {
    Step::Rejected(format!("Please, select a valid {}!", kind))
}

/// "A, B or C"
fn list_choices(choices: &[&str], last_joiner: &str) -> String {
    match choices.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("{}{}{}", rest.join(", "), last_joiner, last)
        }
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}

pub fn city_prompt() -> String {
    let cities: Vec<&str> = City::ALL.iter().map(|city| city.title()).collect();
    format!(
        "Which city would you like to see data for: {}?",
        list_choices(&cities, " or ")
    )
}

pub fn month_prompt() -> String {
    let months: Vec<&str> = Month::ALL.iter().map(|month| month.title()).collect();
    format!(
        "Which month do you want to filter by? {}, or 'all'?",
        months.join(", ")
    )
}

pub fn day_prompt() -> String {
    let days: Vec<&str> = Weekday::ALL.iter().map(|day| day.title()).collect();
    format!(
        "Which day of the week would you like to look at? {}, or 'all'?",
        days.join(", ")
    )
}

/// Ask until city, month and day are all valid. `None` when input ends first.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<FilterSelection>> {
    let mut collector = FilterCollector::new();
    let style = console.style();

    while let Some(prompt) = collector.prompt() {
        let Some(answer) = console.ask(&prompt)? else {
            return Ok(None);
        };
        match collector.feed(&answer) {
            Step::Accepted(echo) => console.say(echo)?,
            Step::Rejected(message) => console.say(style.warning(&message))?,
        }
    }

    console.say("-".repeat(40))?;
    Ok(collector.selection())
}
