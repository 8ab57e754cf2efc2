use super::filters::collect_filters;
use super::preview::preview_rows;
use super::report::run_reports;
use crate::presentation::formatters::format_quantity;
use crate::types::Answer;
use crate::ui::Console;
use anyhow::Result;
use bikeshare_runtime::{Config, load_table};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";

/// Run sessions until the user declines to restart or input ends.
/// A trip source that cannot be loaded ends the run with an error.
pub fn handle<R: BufRead, W: Write>(config: &Config, console: &mut Console<R, W>) -> Result<()> {
    let style = console.style();
    console.say(style.heading(GREETING))?;

    let mut iteration = 0;
    loop {
        iteration += 1;

        let Some(selection) = collect_filters(console)? else {
            debug!("input closed while collecting filters");
            return Ok(());
        };
        info!(iteration, %selection, "starting session");

        let table = load_table(config, &selection)?;
        console.say(format!(
            "Loaded {} for {}.",
            format_quantity(table.len(), "trip"),
            selection
        ))?;

        preview_rows(console, &table)?;
        run_reports(console, &table)?;

        let restart = console.ask(RESTART_QUESTION)?;
        if restart.as_deref().and_then(Answer::parse) != Some(Answer::Yes) {
            debug!(iteration, "session finished");
            return Ok(());
        }
    }
}
