//! Changelog documents

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use taglog_core::error::{ChangelogError, Result};

use crate::patterns;
use crate::version::Version;

/// Document header line
pub const HEADER: &str = "# Changelog";

/// Number of leading non-blank lines taken up by the header
pub const HEADER_SIZE: usize = 1;

/// A full changelog: the fixed header followed by version sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changelog {
    versions: Vec<Version>,
}

impl Changelog {
    /// Create a changelog with no versions
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a changelog file.
    ///
    /// A missing file yields a header-only document. Any other read failure
    /// is returned.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn analyze_changelog_file(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "changelog not found, starting from header");
                HEADER.to_string()
            }
            Err(source) => {
                return Err(ChangelogError::Io {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };

        let changelog = Self::parse(&content)?;
        info!(
            path = %path.display(),
            version_count = changelog.versions.len(),
            "changelog loaded"
        );
        Ok(changelog)
    }

    /// Parse changelog text.
    ///
    /// Blank lines are dropped and the first remaining line is taken as the
    /// header. Each `## vX.Y.Z` line opens a version; every other line goes
    /// to the open version.
    pub fn parse(content: &str) -> Result<Self> {
        let mut changelog = Self::new();
        let mut current: Option<Version> = None;

        let lines = content
            .split_inclusive('\n')
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !is_blank(line));

        for (position, (line_number, line)) in lines.enumerate() {
            if position < HEADER_SIZE {
                if line.trim_end() != HEADER {
                    warn!(line_number, line = line.trim_end(), "unexpected header line skipped");
                }
                continue;
            }

            if patterns::is_version_heading(line) {
                if let Some(version) = current.take() {
                    changelog.add_version(version);
                }
                debug!(line_number, heading = line.trim_end(), "version heading found");
                current = Some(Version::new(line));
                continue;
            }

            match current.as_mut() {
                Some(version) => version.set_line(line, line_number)?,
                None => {
                    return Err(ChangelogError::MalformedDocument {
                        line_number,
                        line: line.trim_end().to_string(),
                        reason: "content before any version heading".to_string(),
                    }
                    .into())
                }
            }
        }

        if let Some(version) = current {
            changelog.add_version(version);
        }

        Ok(changelog)
    }

    /// Versions in document order
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Insert a version at the front
    pub fn push_version(&mut self, version: Version) {
        self.versions.insert(0, version);
    }

    /// Append a version at the end
    pub fn add_version(&mut self, version: Version) {
        self.versions.push(version);
    }

    /// First version whose heading carries exactly this version number
    pub fn find_release(&self, number: &semver::Version) -> Option<&Version> {
        self.versions.iter().find(|v| {
            v.number()
                .and_then(|n| semver::Version::parse(n).ok())
                .is_some_and(|n| &n == number)
        })
    }

    /// Route a tagged commit line into the version matching `release_line`.
    ///
    /// The first version whose heading contains `release_line` receives the
    /// line. With no match, a version headed by `release_line` is created
    /// and put at the front, but only once the line has been accepted.
    #[instrument(skip(self), fields(version_count = self.versions.len()))]
    pub fn add_line_in_version(&mut self, release_line: &str, line: &str) -> Result<()> {
        if let Some(version) = self
            .versions
            .iter_mut()
            .find(|v| v.version_title_matches(release_line))
        {
            debug!(heading = version.heading().trim_end(), "adding to existing version");
            return version.add_commit_line(line);
        }

        let mut version = Version::new(release_line);
        version.add_commit_line(line)?;
        info!(heading = release_line.trim_end(), "new version created");
        self.push_version(version);
        Ok(())
    }

    /// Render to markdown
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", HEADER)?;
        for version in &self.versions {
            write!(f, "{}", version)?;
        }
        Ok(())
    }
}

fn is_blank(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "# Changelog

## v0.2.0 (March 20 2021)

### Added

* search command
* config discovery

### Fixed

* crash on empty input

## v0.1.0 (March 1 2021)

### Added

* initial release
";

    fn headings(changelog: &Changelog) -> Vec<&str> {
        changelog.versions().iter().map(|v| v.heading()).collect()
    }

    #[test]
    fn test_parse_structure() {
        let changelog = Changelog::parse(SAMPLE).unwrap();

        assert_eq!(
            headings(&changelog),
            vec!["## v0.2.0 (March 20 2021)\n", "## v0.1.0 (March 1 2021)\n"]
        );

        let latest = &changelog.versions()[0];
        assert_eq!(latest.groups().len(), 2);
        assert_eq!(latest.groups()[0].heading(), "### Added");
        assert_eq!(
            latest.groups()[0].lines(),
            &["* search command\n".to_string(), "* config discovery\n".to_string()]
        );
        assert_eq!(latest.groups()[1].lines(), &["* crash on empty input\n".to_string()]);
    }

    #[test]
    fn test_round_trip() {
        let changelog = Changelog::parse(SAMPLE).unwrap();
        let rendered = changelog.render();
        let reparsed = Changelog::parse(&rendered).unwrap();

        assert_eq!(changelog, reparsed);
        assert_eq!(reparsed.render(), rendered);
    }

    #[test]
    fn test_blank_lines_are_insignificant() {
        let compact = "# Changelog\n## v0.1.0 (March 1 2021)\n### Added\n* initial release\n";
        let spaced = "# Changelog\n\n\n## v0.1.0 (March 1 2021)\n\n\n### Added\n\n* initial release\n\n";
        assert_eq!(
            Changelog::parse(compact).unwrap(),
            Changelog::parse(spaced).unwrap()
        );
    }

    #[test]
    fn test_content_before_version_is_rejected() {
        let err = Changelog::parse("# Changelog\n\n* stray entry\n").unwrap_err();
        assert!(err.is_malformed_document());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_entry_before_group_is_rejected() {
        let err = Changelog::parse("# Changelog\n## v0.1.0\n* stray entry\n").unwrap_err();
        assert!(err.is_malformed_document());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_first_line_is_always_header() {
        let changelog = Changelog::parse("## v0.1.0\n").unwrap();
        assert!(changelog.versions().is_empty());
    }

    #[test]
    fn test_missing_file_gives_header_only() {
        let temp = TempDir::new().unwrap();
        let changelog = Changelog::analyze_changelog_file(&temp.path().join("CHANGELOG.md")).unwrap();

        assert!(changelog.versions().is_empty());
        assert_eq!(changelog.render(), "# Changelog\n\n");
    }

    #[test]
    fn test_analyze_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, SAMPLE).unwrap();

        let changelog = Changelog::analyze_changelog_file(&path).unwrap();
        assert_eq!(changelog.versions().len(), 2);
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Changelog::analyze_changelog_file(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read changelog"));
    }

    #[test]
    fn test_end_to_end_on_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut changelog =
            Changelog::analyze_changelog_file(&temp.path().join("CHANGELOG.md")).unwrap();

        changelog
            .add_line_in_version("## v0.3.0 (March 31 2021)\n", ":CHANGE: testing change")
            .unwrap();

        assert_eq!(
            changelog.render(),
            "# Changelog\n\n## v0.3.0 (March 31 2021)\n\n### Change\n\n* testing change\n\n"
        );
    }

    #[test]
    fn test_new_version_goes_to_front() {
        let mut changelog = Changelog::parse(SAMPLE).unwrap();
        changelog
            .add_line_in_version("## v0.0.1 (February 1 2021)\n", ":ADD: very old entry\n")
            .unwrap();

        assert_eq!(
            headings(&changelog),
            vec![
                "## v0.0.1 (February 1 2021)\n",
                "## v0.2.0 (March 20 2021)\n",
                "## v0.1.0 (March 1 2021)\n",
            ]
        );
    }

    #[test]
    fn test_existing_version_is_reused() {
        let mut changelog = Changelog::parse(SAMPLE).unwrap();
        changelog
            .add_line_in_version("## v0.1.0", ":FIX: late fix\n")
            .unwrap();

        assert_eq!(changelog.versions().len(), 2);
        let old = &changelog.versions()[1];
        assert_eq!(old.groups().len(), 2);
        assert_eq!(old.groups()[1].heading(), "### Fix");
        assert_eq!(old.groups()[1].lines(), &["* late fix\n".to_string()]);
    }

    #[test]
    fn test_existing_group_is_reused() {
        let mut changelog = Changelog::parse(SAMPLE).unwrap();
        changelog
            .add_line_in_version("## v0.2.0", ":FIXED: another crash\n")
            .unwrap();

        let latest = &changelog.versions()[0];
        assert_eq!(latest.groups().len(), 2);
        assert_eq!(latest.groups()[1].lines().len(), 2);
    }

    #[test]
    fn test_trailing_tag_keeps_entries_on_separate_lines() {
        let mut changelog = Changelog::new();
        changelog
            .add_line_in_version("## v0.1.0 (today)\n", "parser fix :FIX:\n")
            .unwrap();
        changelog
            .add_line_in_version("## v0.1.0 (today)\n", ":FIX: other\n")
            .unwrap();

        let fix = &changelog.versions()[0].groups()[0];
        assert_eq!(fix.lines(), &["* parser fix \n".to_string(), "* other\n".to_string()]);
        assert!(changelog.render().contains("* parser fix \n* other\n"));
    }

    #[test]
    fn test_every_tag_is_removed_from_entry() {
        let mut changelog = Changelog::new();
        changelog
            .add_line_in_version("## v0.1.0 (today)\n", ":ADD: first :FIX: second\n")
            .unwrap();

        let groups = changelog.versions()[0].groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading(), "### Add");
        assert_eq!(groups[0].lines(), &["* first second\n".to_string()]);
    }

    #[test]
    fn test_rejected_line_leaves_document_untouched() {
        let mut changelog = Changelog::parse(SAMPLE).unwrap();
        let before = changelog.clone();

        let err = changelog
            .add_line_in_version("## v0.2.0", "no tag here")
            .unwrap_err();
        assert!(err.is_malformed_commit_tag());
        assert_eq!(changelog, before);

        let err = changelog
            .add_line_in_version("## v9.9.9 (someday)\n", "no tag here")
            .unwrap_err();
        assert!(err.is_malformed_commit_tag());
        assert_eq!(changelog, before);
    }

    #[test]
    fn test_find_release() {
        let changelog = Changelog::parse(SAMPLE).unwrap();

        let found = changelog.find_release(&semver::Version::new(0, 1, 0)).unwrap();
        assert_eq!(found.heading(), "## v0.1.0 (March 1 2021)\n");
        assert!(changelog.find_release(&semver::Version::new(1, 0, 0)).is_none());
    }

    #[test]
    fn test_push_and_add_version() {
        let mut changelog = Changelog::new();
        changelog.add_version(Version::new("## v0.1.0\n"));
        changelog.add_version(Version::new("## v0.2.0\n"));
        changelog.push_version(Version::new("## v0.3.0\n"));

        assert_eq!(headings(&changelog), vec!["## v0.3.0\n", "## v0.1.0\n", "## v0.2.0\n"]);
    }

    #[test]
    fn test_serializes_structure() {
        let changelog = Changelog::parse(SAMPLE).unwrap();
        let json = serde_json::to_value(&changelog).unwrap();

        assert_eq!(json["versions"][1]["groups"][0]["heading"], "### Added");
        assert_eq!(json["versions"][1]["groups"][0]["lines"][0], "* initial release\n");
    }
}
