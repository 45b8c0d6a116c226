//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "taglog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "taglog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".taglog.yaml";

/// Default changelog file
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default date format for release headings, e.g. "March 31 2021"
pub const DEFAULT_DATE_FORMAT: &str = "%B %d %Y";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".taglog.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# taglog configuration

changelog:
  file: CHANGELOG.md
  write: false
  date_format: "%B %d %Y"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.changelog.file, defaults.changelog.file);
        assert_eq!(parsed.changelog.write, defaults.changelog.write);
        assert_eq!(parsed.changelog.date_format, defaults.changelog.date_format);
    }

    #[test]
    fn test_default_yaml_round_trips() {
        let yaml = default_config_yaml();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.changelog.date_format, DEFAULT_DATE_FORMAT);
    }
}
