use std::fmt;
use std::path::PathBuf;

/// Result type for bikeshare-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Trip source is readable but its contents are unusable
    DataSource { path: PathBuf, message: String },

    /// Trip source could not be opened or is not valid CSV
    Csv { path: PathBuf, source: csv::Error },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl Error {
    pub(crate) fn data_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::DataSource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True when no statistics can be produced from the city's source.
    pub fn is_data_source(&self) -> bool {
        matches!(self, Error::DataSource { .. } | Error::Csv { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataSource { path, message } => {
                write!(f, "Invalid trip data in {}: {}", path.display(), message)
            }
            Error::Csv { path, source } => {
                write!(f, "Cannot read trip data from {}: {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::DataSource { .. } | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
