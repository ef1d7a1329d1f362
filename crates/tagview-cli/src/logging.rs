//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive view owns the terminal, so it logs to a file in the data
//! directory. One-shot commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter for our crates at `level`, everything else at `warn`.
pub fn build_env_filter(level: LogLevel) -> EnvFilter {
    let directives = format!(
        "warn,tagview={level},tagview_engine={level},tagview_providers={level},tagview_runtime={level}"
    );
    EnvFilter::new(directives)
}

pub fn init_logging(level: LogLevel, target: &LogTarget) -> Result<()> {
    let filter = build_env_filter(level);

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    }
    .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_scopes_level_to_own_crates() {
        let filter = build_env_filter(LogLevel::Debug).to_string();
        assert!(filter.contains("tagview_runtime=debug"));
        assert!(filter.contains("tagview_providers=debug"));
    }
}
