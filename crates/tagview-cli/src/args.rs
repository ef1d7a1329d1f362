use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tagview")]
#[command(about = "Browse, filter and paginate tagged posts in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "View query, e.g. 'page=2&pageSize=10&tags=history,tech&search=foo'")]
    pub query: Option<String>,

    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive table (default)
    View {
        #[arg(help = "View query, e.g. 'page=2&pageSize=10&tags=history,tech&search=foo'")]
        query: Option<String>,
    },

    /// Print the visible page for a query and exit
    Dump {
        query: Option<String>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Write a default config.toml into the data directory
    Init {
        #[arg(long)]
        force: bool,
    },
}
