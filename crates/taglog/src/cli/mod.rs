//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use commands::{AddCommand, InitCommand, ShowCommand, ValidateCommand};

/// taglog - Merge tagged commit lines into a markdown changelog
#[derive(Debug, Parser)]
#[command(name = "taglog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add tagged commit lines to a release section
    Add(AddCommand),

    /// Parse the changelog and print it back
    Show(ShowCommand),

    /// Check that the changelog and configuration parse
    Validate(ValidateCommand),

    /// Write a default taglog configuration
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Commands::Add(cmd) => cmd.execute(self),
            Commands::Show(cmd) => cmd.execute(self),
            Commands::Validate(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
        }
    }
}

/// Changelog path: an explicit `--file` wins over the configured one
pub fn changelog_path(cwd: &Path, explicit: Option<&Path>, configured: &Path) -> PathBuf {
    match explicit {
        Some(path) => cwd.join(path),
        None => cwd.join(configured),
    }
}
