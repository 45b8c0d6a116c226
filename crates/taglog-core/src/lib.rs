//! Taglog Core - Core library for changelog maintenance
//!
//! This crate provides the error taxonomy and the configuration system
//! shared by the changelog model and the CLI.

pub mod config;
pub mod error;

pub use config::{Config, ChangelogConfig};
pub use error::{ChangelogError, ConfigError, Result, TaglogError};
