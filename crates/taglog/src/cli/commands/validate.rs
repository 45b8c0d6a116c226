//! Validate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use taglog_changelog::Changelog;
use taglog_core::config::load_config_from_dir;
use taglog_core::{Config, ConfigError, TaglogError};

use crate::cli::output::key_value;
use crate::cli::{changelog_path, Cli, OutputFormat};
use crate::exit_codes;

/// Check that the changelog and configuration parse
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Counts gathered from a parsed changelog
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    versions: usize,
    groups: usize,
    entries: usize,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, strict = self.strict, "executing validate command");
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();
        let mut exit_code = exit_codes::SUCCESS;

        let (config, config_path) = match load_config_from_dir(&cwd) {
            Ok((config, path)) => (config, Some(path)),
            Err(TaglogError::Config(ConfigError::NotFound(_))) => {
                warnings.push("No configuration file found, using defaults".to_string());
                (Config::default(), None)
            }
            Err(e) => {
                errors.push(format!("Configuration: {}", e));
                exit_code = exit_codes::CONFIG_ERROR;
                (Config::default(), None)
            }
        };

        let path = changelog_path(&cwd, self.file.as_deref(), &config.changelog.file);
        if !path.exists() {
            warnings.push(format!(
                "Changelog {} not found, it will be created on first write",
                path.display()
            ));
        }

        let mut summary = Summary::default();
        match Changelog::analyze_changelog_file(&path) {
            Ok(changelog) => {
                summary = summarize(&changelog);
                warnings.extend(structure_warnings(&changelog));
            }
            Err(e) => {
                if e.is_malformed_document() {
                    exit_code = exit_codes::DOCUMENT_ERROR;
                } else if exit_code == exit_codes::SUCCESS {
                    exit_code = exit_codes::ERROR;
                }
                errors.push(format!("Changelog: {}", e));
            }
        }

        if self.strict && !warnings.is_empty() {
            errors.append(&mut warnings);
            if exit_code == exit_codes::SUCCESS {
                exit_code = exit_codes::ERROR;
            }
        }

        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "changelog": path.to_string_lossy(),
                    "versions": summary.versions,
                    "groups": summary.groups,
                    "entries": summary.entries,
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Validation Results").bold());
                    println!();

                    if let Some(config_path) = &config_path {
                        println!("{}", key_value("Config", &config_path.display().to_string()));
                    }
                    println!("{}", key_value("Changelog", &path.display().to_string()));
                    println!(
                        "{}",
                        key_value(
                            "Contents",
                            &format!(
                                "{} version(s), {} group(s), {} entr(ies)",
                                summary.versions, summary.groups, summary.entries
                            )
                        )
                    );
                    println!();

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(exit_code);
        }

        Ok(())
    }
}

fn summarize(changelog: &Changelog) -> Summary {
    let groups = changelog.versions().iter().flat_map(|v| v.groups());
    Summary {
        versions: changelog.versions().len(),
        groups: groups.clone().count(),
        entries: groups.map(|g| g.lines().len()).sum(),
    }
}

/// Sections that parse but will not survive a rewrite unchanged
fn structure_warnings(changelog: &Changelog) -> Vec<String> {
    let mut warnings = Vec::new();
    for version in changelog.versions() {
        let heading = version.heading().trim_end();
        if version.groups().is_empty() {
            warnings.push(format!("{} has no change-type groups", heading));
        }
        for group in version.groups().iter().filter(|g| !g.has_content()) {
            warnings.push(format!(
                "{} / {} has no entries and will be dropped on write",
                heading,
                group.heading()
            ));
        }
    }
    warnings
}
