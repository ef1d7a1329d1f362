use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{LogTarget, init_logging};
use anyhow::Result;
use tagview_runtime::config::LOG_FILE;
use tagview_runtime::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let command = cli.command.unwrap_or(Commands::View { query: cli.query });

    // The TUI owns the terminal, so its logs go to a file.
    let target = match command {
        Commands::View { .. } => LogTarget::File(data_dir.join(LOG_FILE)),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.log_level, &target)?;

    match command {
        Commands::Init { force } => handlers::init::handle(&data_dir, force),

        Commands::View { query } => {
            let config = Config::load_from(&Config::path_in(&data_dir))?;
            handlers::view::handle(&config, query)
        }

        Commands::Dump { query, format } => {
            let config = Config::load_from(&Config::path_in(&data_dir))?;
            handlers::dump::handle(&config, query, format)
        }
    }
}
