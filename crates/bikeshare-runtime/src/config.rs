use crate::{Error, Result};
use bikeshare_types::{City, Column};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Resolve the directory holding the city CSV files based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BIKESHARE_DATA_DIR environment variable (with tilde expansion)
/// 3. Current working directory
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BIKESHARE_DATA_DIR") {
        return Ok(expand_tilde(&env_path));
    }

    Ok(std::env::current_dir()?)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitySource {
    pub file: PathBuf,
}

/// Header names of the logical trip columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub start_time: String,
    pub trip_duration: String,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: String,
    pub birth_year: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            start_time: "Start Time".to_string(),
            trip_duration: "Trip Duration".to_string(),
            start_station: "Start Station".to_string(),
            end_station: "End Station".to_string(),
            user_type: "User Type".to_string(),
            gender: "Gender".to_string(),
            birth_year: "Birth Year".to_string(),
        }
    }
}

impl ColumnNames {
    pub fn name(&self, column: Column) -> &str {
        match column {
            Column::StartTime => &self.start_time,
            Column::TripDuration => &self.trip_duration,
            Column::StartStation => &self.start_station,
            Column::EndStation => &self.end_station,
            Column::UserType => &self.user_type,
            Column::Gender => &self.gender,
            Column::BirthYear => &self.birth_year,
        }
    }
}

/// Process-wide city to source mapping, built once before the first session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Overrides keyed by canonical city name ("chicago", "new york city", "washington")
    #[serde(default)]
    pub cities: BTreeMap<String, CitySource>,

    #[serde(default)]
    pub columns: ColumnNames,

    #[serde(skip)]
    data_dir: PathBuf,
}

impl Config {
    /// Built-in mapping rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Read the TOML file at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path, data_dir: impl Into<PathBuf>) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(data_dir));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.data_dir = data_dir.into();
        config.validate()?;
        Ok(config)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("bikeshare.toml")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn set_source(&mut self, city: City, file: impl Into<PathBuf>) {
        self.cities
            .insert(city.key().to_string(), CitySource { file: file.into() });
    }

    /// Location of a city's CSV; relative files resolve against the data dir.
    pub fn source_path(&self, city: City) -> PathBuf {
        let file = self
            .cities
            .get(city.key())
            .map(|source| source.file.clone())
            .unwrap_or_else(|| PathBuf::from(city.default_file()));

        if file.is_absolute() {
            file
        } else {
            self.data_dir.join(file)
        }
    }

    fn validate(&self) -> Result<()> {
        for key in self.cities.keys() {
            if City::parse(key).map(|city| city.key() != key).unwrap_or(true) {
                return Err(Error::Config(format!(
                    "unknown city '{}' (expected one of: {})",
                    key,
                    City::ALL.map(|c| c.key()).join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_sources() {
        let config = Config::new("/data");
        assert_eq!(
            config.source_path(City::Chicago),
            PathBuf::from("/data/chicago.csv")
        );
        assert_eq!(
            config.source_path(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
        assert_eq!(config.columns.name(Column::BirthYear), "Birth Year");
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path, temp_dir.path())?;
        assert!(config.cities.is_empty());
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.data_dir(), temp_dir.path());

        Ok(())
    }

    #[test]
    fn test_load_overrides() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("bikeshare.toml");
        std::fs::write(
            &config_path,
            r#"
[cities."new york city"]
file = "nyc.csv"

[cities.washington]
file = "/srv/dc.csv"

[columns]
start_time = "started_at"
"#,
        )?;

        let config = Config::load_from(&config_path, temp_dir.path())?;
        assert_eq!(
            config.source_path(City::NewYorkCity),
            temp_dir.path().join("nyc.csv")
        );
        assert_eq!(
            config.source_path(City::Washington),
            PathBuf::from("/srv/dc.csv")
        );
        assert_eq!(
            config.source_path(City::Chicago),
            temp_dir.path().join("chicago.csv")
        );
        assert_eq!(config.columns.start_time, "started_at");
        assert_eq!(config.columns.trip_duration, "Trip Duration");

        Ok(())
    }

    #[test]
    fn test_unknown_city_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("bikeshare.toml");
        std::fs::write(&config_path, "[cities.boston]\nfile = \"boston.csv\"\n")?;

        let err = Config::load_from(&config_path, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("boston"));

        Ok(())
    }

    #[test]
    fn test_set_source() {
        let mut config = Config::new("/data");
        config.set_source(City::Washington, "fixtures/dc.csv");
        assert_eq!(
            config.source_path(City::Washington),
            PathBuf::from("/data/fixtures/dc.csv")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("data/trips"), PathBuf::from("data/trips"));
    }
}
