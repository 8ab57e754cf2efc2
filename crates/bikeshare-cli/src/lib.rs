// NOTE: bikeshare session flow
//
// One iteration = collect filters -> load table -> optional raw rows -> four reports -> restart?
// - The table is re-read from CSV on every iteration and dropped at the end of it
// - Reports only borrow the table, so their order does not matter
// - Only a data-source failure ends the program with an error; bad answers are re-asked

mod args;
mod commands;
pub mod handlers;
pub mod presentation;
pub mod types;
pub mod ui;

pub use args::Cli;
pub use commands::run;
