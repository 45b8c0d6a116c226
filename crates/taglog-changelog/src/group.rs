//! Change-type groups

use std::fmt;

use serde::Serialize;

/// Bullet marker that prefixes every stored entry
pub const BULLET: &str = "* ";

/// An ordered set of bullet lines under one change-type heading,
/// e.g. `### Added`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    heading: String,
    lines: Vec<String>,
}

impl Group {
    /// Create an empty group
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    /// Create a group for a change-type tag, e.g. `FIX` becomes `### Fix`
    pub fn for_tag(tag: &str) -> Self {
        Self::new(format!("### {}", capitalize(tag)))
    }

    /// Heading text, without a line terminator
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Stored entries, each starting with the bullet marker
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append an entry.
    ///
    /// Leading bullet markers are stripped before a single one is put back,
    /// so `"* * fix"` and `"fix"` store the same entry. The line keeps
    /// whatever terminator the caller gave it.
    pub fn add_line(&mut self, line: &str) {
        let mut content = line;
        while let Some(rest) = content.strip_prefix(BULLET) {
            content = rest;
        }
        self.lines.push(format!("{BULLET}{content}"));
    }

    /// Whether any entry has been added
    pub fn has_content(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Case-insensitive substring test of `title` against the heading
    pub fn title_matches(&self, title: &str) -> bool {
        self.heading
            .to_uppercase()
            .contains(&title.to_uppercase())
    }

    /// Render to markdown. An empty group renders as nothing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_content() {
            return Ok(());
        }
        write!(f, "{}\n\n", self.heading)?;
        for line in &self.lines {
            f.write_str(line)?;
        }
        f.write_str("\n")
    }
}

/// First letter uppercase, the rest lowercase
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
