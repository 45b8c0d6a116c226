//! Show command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use taglog_changelog::Changelog;
use taglog_core::config::load_config_or_default;

use crate::cli::{changelog_path, Cli, OutputFormat};

/// Parse the changelog and print it back
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, "executing show command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;
        let path = changelog_path(&cwd, self.file.as_deref(), &config.changelog.file);

        let changelog = Changelog::analyze_changelog_file(&path)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&changelog)?);
            }
            OutputFormat::Text => {
                print!("{}", changelog);
            }
        }

        Ok(())
    }
}
