//! Configuration file structures for the roster parser.
//!
//! The configuration is a YAML file whose values can be overridden with
//! environment variables prefixed by `ROSTER_`, nested keys being separated by
//! a double underscore. Every key is optional and a missing file simply means
//! defaults.
//!
//! # Configuration File Format
//!
//! ```yaml
//! parser:
//!   # What to do with an unknown command keyword: `help` (default) shows the
//!   # help listing, `reject` answers with an "Unknown command!" feedback.
//!   unknown_keyword: help
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export ROSTER_PARSER__UNKNOWN_KEYWORD="reject"
//! ```

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use log::debug;
use serde::Deserialize;

use crate::commands::{CommandParser, UnknownKeyword};

/// Prefix of the environment variables overriding the configuration.
const ENV_PREFIX: &str = "ROSTER_";

/// Root configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command parser configuration
    pub parser: Parser,
}

/// Command parser configuration.
///
/// # YAML Section
///
/// ```yaml
/// parser:
///   unknown_keyword: reject
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Parser {
    /// Policy for keywords the parser does not know.
    pub unknown_keyword: UnknownKeyword,
}

impl Config {
    /// Loads the configuration from an optional YAML file and the environment.
    ///
    /// Environment variables take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or holds invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            debug!("loading configuration from {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(anyhow::Error::new)?;

        debug!("loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Builds a command parser following this configuration.
    pub fn command_parser(&self) -> CommandParser {
        CommandParser::new().with_unknown_keyword(self.parser.unknown_keyword)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use figment::Jail;

    use super::*;
    use crate::commands::Command;

    #[test]
    fn test_load_defaults_without_file() {
        Jail::expect_with(|_| {
            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            assert_eq!(config.parser.unknown_keyword, UnknownKeyword::Help);
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_file_means_defaults() {
        Jail::expect_with(|_| {
            let config =
                Config::load(Some(Path::new("missing.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.parser.unknown_keyword, UnknownKeyword::Help);
            Ok(())
        });
    }

    #[test]
    fn test_load_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("roster.yaml", "parser:\n  unknown_keyword: reject\n")?;
            let config =
                Config::load(Some(Path::new("roster.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.parser.unknown_keyword, UnknownKeyword::Reject);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("roster.yaml", "parser:\n  unknown_keyword: help\n")?;
            jail.set_env("ROSTER_PARSER__UNKNOWN_KEYWORD", "reject");
            let config =
                Config::load(Some(Path::new("roster.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.parser.unknown_keyword, UnknownKeyword::Reject);
            Ok(())
        });
    }

    #[test]
    fn test_load_invalid_value() {
        Jail::expect_with(|jail| {
            jail.create_file("roster.yaml", "parser:\n  unknown_keyword: shout\n")?;
            assert!(Config::load(Some(Path::new("roster.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_temporary_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "parser:\n  unknown_keyword: reject").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.parser.unknown_keyword, UnknownKeyword::Reject);
    }

    #[test]
    fn test_command_parser_follows_config() {
        let config = Config {
            parser: Parser {
                unknown_keyword: UnknownKeyword::Reject,
            },
        };
        let parser = config.command_parser();

        assert_eq!(parser.unknown_keyword(), UnknownKeyword::Reject);
        assert!(parser.parse("dance").is_incorrect());
        assert_eq!(Config::default().command_parser().parse("dance"), Command::Help);
    }
}
