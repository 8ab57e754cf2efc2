use super::args::Cli;
use super::handlers;
use crate::presentation::Style;
use crate::ui::Console;
use anyhow::Result;
use bikeshare_runtime::{Config, expand_tilde, resolve_data_dir};
use is_terminal::IsTerminal;
use std::io;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| Config::default_path(&data_dir));
    let config = Config::load_from(&config_path, &data_dir)?;
    debug!(
        data_dir = %data_dir.display(),
        config = %config_path.display(),
        "configuration loaded"
    );

    let color = !cli.no_color && io::stdout().is_terminal();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), Style::new(color));

    handlers::session::handle(&config, &mut console)
}
