//! Add command

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::{debug, info};

use taglog_changelog::Changelog;
use taglog_core::config::load_config_or_default;

use crate::cli::output::{self, path_style};
use crate::cli::{changelog_path, Cli, OutputFormat};

/// Add tagged commit lines to a release section
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Tagged commit lines, e.g. ":FIX: handle empty input"
    #[arg(required = true, value_name = "COMMIT_LINE")]
    pub lines: Vec<String>,

    /// Release heading to add to, matched as a substring of existing headings
    #[arg(
        short,
        long,
        value_name = "LINE",
        conflicts_with = "for_version",
        required_unless_present = "for_version"
    )]
    pub release: Option<String>,

    /// Release version; the heading becomes "## v<VERSION> (<date>)"
    #[arg(long = "for-version", value_name = "VERSION")]
    pub for_version: Option<semver::Version>,

    /// Date text for a new release heading (default: today)
    #[arg(long, requires = "for_version")]
    pub date: Option<String>,

    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Write the result back to the changelog instead of printing it
    #[arg(short, long)]
    pub write: bool,
}

impl AddCommand {
    /// Execute the add command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            release = ?self.release,
            version = ?self.for_version,
            line_count = self.lines.len(),
            "executing add command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;
        let path = changelog_path(&cwd, self.file.as_deref(), &config.changelog.file);

        let mut changelog = Changelog::analyze_changelog_file(&path)?;

        let today = Local::now().date_naive();
        let release_line = self.release_line(&changelog, &config.changelog.date_format, today)?;
        debug!(release_line = release_line.trim_end(), "release resolved");

        for line in &self.lines {
            changelog.add_line_in_version(&release_line, &terminated(line))?;
        }

        if self.write || config.changelog.write {
            std::fs::write(&path, changelog.render())?;
            info!(path = %path.display(), "changelog written");

            if !cli.quiet {
                output::success(&format!(
                    "Added {} line(s) to {}",
                    self.lines.len(),
                    path_style().apply_to(path.display())
                ));
            }
            return Ok(());
        }

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

    /// Resolve the release heading lines are routed to.
    ///
    /// `--release` is used verbatim. With `--for-version`, an existing section
    /// for that version is reused whatever its date; otherwise a new heading
    /// is built from the date.
    fn release_line(
        &self,
        changelog: &Changelog,
        date_format: &str,
        today: NaiveDate,
    ) -> anyhow::Result<String> {
        if let Some(release) = &self.release {
            return Ok(release.clone());
        }

        let version = self
            .for_version
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("either --release or --for-version is required"))?;

        if let Some(existing) = changelog.find_release(version) {
            return Ok(existing.heading().to_string());
        }

        let date = self
            .date
            .clone()
            .unwrap_or_else(|| today.format(date_format).to_string());
        Ok(format!("## v{} ({})\n", version, date))
    }
}

/// Commit lines from the command line carry no terminator; give them one
/// so consecutive entries stay on separate lines.
fn terminated(line: &str) -> String {
    if line.ends_with('\n') {
        line.to_string()
    } else {
        format!("{}\n", line)
    }
}
