use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use tagview_runtime::Config;

pub fn handle(data_dir: &Path, force: bool) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    tracing::debug!(path = %config_path.display(), "config written");

    println!("{} {}", "Wrote".green().bold(), config_path.display());
    Ok(())
}
