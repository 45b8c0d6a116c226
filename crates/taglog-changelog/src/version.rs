//! Version sections

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use taglog_core::error::{ChangelogError, Result};

use crate::group::Group;
use crate::patterns;

/// A release section: its raw heading line and the groups under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    heading: String,
    groups: Vec<Group>,
}

impl Version {
    /// Create a version from its raw heading line, e.g.
    /// `"## v0.3.0 (March 31 2021)\n"`
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            groups: Vec::new(),
        }
    }

    /// Raw heading line, including its terminator if it had one
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Groups in first-seen order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The `X.Y.Z` number in the heading, if any
    pub fn number(&self) -> Option<&str> {
        patterns::version_number(&self.heading)
    }

    /// Ingest one raw line read from a changelog file.
    ///
    /// A `### Word` line opens a new group; anything else becomes an entry
    /// of the most recent group. `line_number` is only used for reporting.
    pub fn set_line(&mut self, line: &str, line_number: usize) -> Result<()> {
        if let Some(heading) = patterns::group_heading(line) {
            debug!(heading, "group heading found");
            self.groups.push(Group::new(heading));
            return Ok(());
        }

        match self.groups.last_mut() {
            Some(group) => {
                group.add_line(line);
                Ok(())
            }
            None => Err(ChangelogError::MalformedDocument {
                line_number,
                line: line.trim_end().to_string(),
                reason: "entry before any change-type heading".to_string(),
            }
            .into()),
        }
    }

    /// Route a tagged commit line into its group.
    ///
    /// Fails without touching any group when the line has no `:WORD:` tag.
    #[instrument(skip(self), fields(version = %self.heading.trim_end()))]
    pub fn add_commit_line(&mut self, line: &str) -> Result<()> {
        let (tag, text) = patterns::split_tag(line).ok_or_else(|| {
            ChangelogError::MalformedCommitTag {
                line: line.trim_end().to_string(),
            }
        })?;

        let group = self.find_group(tag);
        group.add_line(&text);
        debug!(tag, group = group.heading(), "commit line added");
        Ok(())
    }

    /// First group whose heading contains `title` (ignoring case),
    /// creating `### Title` at the end when there is none.
    pub fn find_group(&mut self, title: &str) -> &mut Group {
        let index = match self.groups.iter().position(|g| g.title_matches(title)) {
            Some(index) => index,
            None => {
                let group = Group::for_tag(title);
                debug!(heading = group.heading(), "creating group");
                self.groups.push(group);
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Case-sensitive test of whether `title` occurs in the heading
    pub fn version_title_matches(&self, title: &str) -> bool {
        self.heading.contains(title)
    }

    /// Render to markdown
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for group in &self.groups {
            write!(f, "{}", group)?;
        }
        f.write_str("\n")
    }
}
