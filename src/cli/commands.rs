//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Print the shelf as JSON for the site build (default)
    Fetch {
        /// Write the JSON to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show the shelf as tables
    Show,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Fetch { output: None }
    }
}
