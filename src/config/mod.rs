//! Configuration module for tgutil.
//!
//! Loads configuration from environment variables.

use std::env;

use crate::utils::command::DEFAULT_PREFIX;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command prefix character (first char of COMMAND_PREFIX).
    pub command_prefix: char,

    /// Public username (without @) used for message links
    /// when none is given explicitly.
    pub default_username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_PREFIX,
            default_username: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required; unset or blank values fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("COMMAND_PREFIX").ok().as_deref(),
            env::var("DEFAULT_USERNAME").ok().as_deref(),
        )
    }

    fn from_vars(command_prefix: Option<&str>, default_username: Option<&str>) -> Self {
        let command_prefix = command_prefix
            .and_then(|s| s.trim().chars().next())
            .unwrap_or(DEFAULT_PREFIX);

        // Strip @ if present
        let default_username = default_username
            .map(|s| s.trim().trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());

        Self {
            command_prefix,
            default_username,
        }
    }
}
