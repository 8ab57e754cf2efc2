pub mod formatters;
pub mod style;
pub mod views;

pub use style::Style;
