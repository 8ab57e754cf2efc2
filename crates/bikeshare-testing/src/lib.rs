//! Testing infrastructure for bikeshare integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for an isolated data directory plus scripted CLI runs
//! - `assertions`: Checks over the CLI's report output
//! - `fixtures`: Sample trip CSVs for the three cities

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
