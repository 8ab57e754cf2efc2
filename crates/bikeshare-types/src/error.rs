use std::fmt;

/// Result type for bikeshare-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which enumerated set a rejected input was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    City,
    Month,
    Day,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::City => write!(f, "city"),
            SelectionKind::Month => write!(f, "month"),
            SelectionKind::Day => write!(f, "day"),
        }
    }
}

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input outside an enumerated set (city, month or day)
    InvalidSelection { kind: SelectionKind, input: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelection { kind, input } => {
                write!(f, "'{}' is not a valid {}", input, kind)
            }
        }
    }
}

impl std::error::Error for Error {}
