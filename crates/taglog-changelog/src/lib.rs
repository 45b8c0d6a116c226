//! Taglog Changelog - Changelog document model
//!
//! A changelog is recovered from markdown into versions, each holding
//! ordered change-type groups of bullet lines. Tagged commit lines such as
//! `:FIX: handle empty input` are routed into the matching version and
//! group, and the whole document is rendered back to the same markdown
//! shape.

pub mod document;
pub mod group;
pub mod patterns;
pub mod version;

pub use document::{Changelog, HEADER, HEADER_SIZE};
pub use group::Group;
pub use version::Version;
