//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use taglog_core::config::defaults::{DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML};
use taglog_core::config::Config;

use crate::cli::output::{self, path_style};
use crate::cli::Cli;
use crate::exit_codes;

/// Write a default taglog configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Fail instead of prompting when the file exists
    #[arg(long)]
    pub no_prompt: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, no_prompt = self.no_prompt, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self.config_path(&cwd);

        if !self.may_write(&config_path)? {
            println!("{}", style("Aborted.").yellow());
            std::process::exit(exit_codes::CANCELLED);
        }

        std::fs::write(&config_path, self.content()?)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to point at your changelog", config_path.display());
            println!(
                "  2. Run {} to add an entry",
                style("taglog add --for-version 0.1.0 \":ADD: first entry\"").cyan()
            );
        }

        Ok(())
    }

    /// Whether the config may be written, asking before overwriting
    fn may_write(&self, config_path: &Path) -> anyhow::Result<bool> {
        if !config_path.exists() || self.force {
            return Ok(true);
        }

        if self.no_prompt {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        Ok(Confirm::new()
            .with_prompt(format!(
                "Configuration file already exists at {}. Overwrite?",
                config_path.display()
            ))
            .default(false)
            .interact()?)
    }

    fn config_path(&self, cwd: &Path) -> PathBuf {
        match &self.output {
            Some(path) => cwd.join(path),
            None if self.toml => cwd.join(DEFAULT_CONFIG_TOML),
            None => cwd.join(DEFAULT_CONFIG_YAML),
        }
    }

    fn content(&self) -> anyhow::Result<String> {
        if self.toml {
            let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
            Ok(toml::to_string_pretty(&config)?)
        } else {
            Ok(DEFAULT_CONFIG_TEMPLATE.to_string())
        }
    }
}
