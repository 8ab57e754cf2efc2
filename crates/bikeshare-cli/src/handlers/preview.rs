use crate::presentation::views::RowsView;
use crate::types::Answer;
use crate::ui::Console;
use anyhow::Result;
use bikeshare_types::TripTable;
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

const FIRST_QUESTION: &str = "Would you like to see 5 rows of raw data with all available columns? \
Enter yes to see them or no to go straight to the statistics.";
const NEXT_QUESTION: &str = "Would you like to see the next 5 rows? Enter yes or no.";

/// Page through the table five rows at a time until the user says no or the
/// rows run out. End of input counts as no.
pub fn preview_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    let style = console.style();
    let headers = table.display_headers();
    let mut offset = 0;

    loop {
        let question = if offset == 0 { FIRST_QUESTION } else { NEXT_QUESTION };
        let answer = match console.ask(question)? {
            None => return Ok(()),
            Some(answer) => Answer::parse(&answer),
        };

        match answer {
            Some(Answer::No) => return Ok(()),
            None => {
                console.say(style.warning("Please, answer yes or no!"))?;
                continue;
            }
            Some(Answer::Yes) => {}
        }

        let rows = table.display_rows(offset, PAGE_SIZE);
        if rows.is_empty() {
            console.say("There are no rows to display.")?;
            return Ok(());
        }

        console.say(RowsView::new(&headers, &rows, offset))?;
        offset += rows.len();

        if offset >= table.len() {
            console.say(style.dimmed(&format!(
                "That was the last row ({} in total).",
                table.len()
            )))?;
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Style;
    use bikeshare_types::{Column, TripRecord};
    use chrono::NaiveDate;

    fn table(rows: usize) -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 2, 1)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let records = (0..rows)
            .map(|i| {
                TripRecord::new(start, 60.0).with_fields(vec![format!("trip-{:02}", i)])
            })
            .collect();
        TripTable::new(vec!["Trip".to_string()], vec![Column::Gender], records)
    }

    fn run(table: &TripTable, script: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new(), Style::plain());
        preview_rows(&mut console, table).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_no_skips_preview() {
        let output = run(&table(12), "NO\n");
        assert!(!output.contains("trip-00"));
        assert!(!output.contains(NEXT_QUESTION));
    }

    #[test]
    fn test_pages_until_no() {
        let output = run(&table(12), "yes\nyes\nno\n");
        assert!(output.contains("trip-00"));
        assert!(output.contains("trip-04"));
        assert!(output.contains("trip-09"));
        assert!(!output.contains("trip-10"));
        assert_eq!(output.matches(NEXT_QUESTION).count(), 2);
    }

    #[test]
    fn test_stops_offering_pages_past_the_end() {
        let output = run(&table(7), "yes\nyes\nyes\nyes\n");
        assert!(output.contains("trip-06"));
        assert!(output.contains("That was the last row (7 in total)."));
        assert_eq!(output.matches(NEXT_QUESTION).count(), 1);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let output = run(&table(5), "yes\n");
        assert!(output.contains("trip-04"));
        assert!(output.contains("That was the last row (5 in total)."));
        assert!(!output.contains(NEXT_QUESTION));
    }

    #[test]
    fn test_empty_table() {
        let output = run(&table(0), "yes\n");
        assert!(output.contains("There are no rows to display."));
    }

    #[test]
    fn test_invalid_answer_is_asked_again() {
        let output = run(&table(3), "maybe\nyes\n");
        assert_eq!(output.matches("Please, answer yes or no!").count(), 1);
        assert_eq!(output.matches(FIRST_QUESTION).count(), 2);
        assert!(output.contains("trip-02"));
    }

    #[test]
    fn test_end_of_input_counts_as_no() {
        let output = run(&table(3), "");
        assert!(!output.contains("trip-00"));
    }
}
