//! Line patterns recognised in a changelog

use regex::Regex;
use std::sync::LazyLock;

/// Version heading, e.g. `## v1.2.3 (March 31 2021)`
pub static VERSION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"## v(?P<version>\d+\.\d+\.\d+)").expect("Invalid regex")
});

/// Change-type group heading, e.g. `### Added`
pub static GROUP_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### \w+").expect("Invalid regex"));

/// Change-type tag in a commit line, e.g. `:CHANGE:`, with the spaces
/// after it. Line terminators are never part of a match.
pub static CHANGE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":(?P<tag>[A-Z]+):[ \t]*").expect("Invalid regex")
});

/// Check whether a raw line introduces a version section
pub fn is_version_heading(line: &str) -> bool {
    VERSION_HEADING_REGEX.is_match(line)
}

/// The `X.Y.Z` number of a version heading, if it has one
pub fn version_number(heading: &str) -> Option<&str> {
    VERSION_HEADING_REGEX
        .captures(heading)
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str())
}

/// The group heading text carried by a raw line, e.g. `### Fixed`
pub fn group_heading(line: &str) -> Option<&str> {
    GROUP_HEADING_REGEX.find(line).map(|m| m.as_str())
}

/// Split a commit line into its tag word and the remaining entry text.
///
/// The first `:WORD:` token picks the group. Every tag is cut out of the
/// text together with the spaces after it, and leading spaces are dropped.
/// The line terminator is kept.
pub fn split_tag(line: &str) -> Option<(&str, String)> {
    let caps = CHANGE_TAG_REGEX.captures(line)?;
    let tag = caps.name("tag")?.as_str();

    let text = CHANGE_TAG_REGEX.replace_all(line, "");
    Some((tag, text.trim_start_matches([' ', '\t']).to_string()))
}
