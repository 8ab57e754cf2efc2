use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bike-share trip data interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        help = "Directory holding the city CSV files [default: $BIKESHARE_DATA_DIR or the current directory]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, help = "TOML file mapping cities to sources [default: <data-dir>/bikeshare.toml]")]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_without_arguments() {
        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();
        assert_eq!(cli.data_dir, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "bikeshare",
            "--data-dir",
            "/srv/trips",
            "--log-level",
            "debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some("/srv/trips"));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["bikeshare", "--log-level", "loud"]).is_err());
    }
}
