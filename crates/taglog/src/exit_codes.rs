//! Exit codes for the CLI

use taglog_core::TaglogError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Commit line without a `:TAG:`
pub const COMMIT_TAG_ERROR: i32 = 3;

/// Changelog file could not be parsed
pub const DOCUMENT_ERROR: i32 = 4;

/// User cancelled
pub const CANCELLED: i32 = 130;

/// Map an error surfaced by a command to its exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TaglogError>() {
        Some(TaglogError::Config(_)) => CONFIG_ERROR,
        Some(e) if e.is_malformed_commit_tag() => COMMIT_TAG_ERROR,
        Some(e) if e.is_malformed_document() => DOCUMENT_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taglog_core::{ChangelogError, ConfigError};

    #[test]
    fn test_error_mapping() {
        let tag: anyhow::Error = TaglogError::from(ChangelogError::MalformedCommitTag {
            line: "no tag".to_string(),
        })
        .into();
        assert_eq!(for_error(&tag), COMMIT_TAG_ERROR);

        let doc: anyhow::Error = TaglogError::from(ChangelogError::MalformedDocument {
            line_number: 2,
            line: "* stray".to_string(),
            reason: "content before any version heading".to_string(),
        })
        .into();
        assert_eq!(for_error(&doc), DOCUMENT_ERROR);

        let config: anyhow::Error = TaglogError::from(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        })
        .into();
        assert_eq!(for_error(&config), CONFIG_ERROR);

        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
