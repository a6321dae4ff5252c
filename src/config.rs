//! Runtime configuration for the command line.
//!
//! Values come from the environment, after an optional `.env` file has been
//! loaded by `main`.

use std::error::Error;
use std::path::PathBuf;

const LOG_CONFIG_VAR: &str = "NETEXPAND_LOG_CONFIG";
const MAX_OUTPUT_VAR: &str = "NETEXPAND_MAX_OUTPUT";
const COLOR_VAR: &str = "NETEXPAND_COLOR";

/// Default cap on printed addresses.
pub const DEFAULT_MAX_OUTPUT: u64 = 65536;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Maximum addresses printed per command, `None` for unlimited.
    pub max_output: Option<u64>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
            max_output: Some(DEFAULT_MAX_OUTPUT),
            color: true,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_CONFIG_VAR) {
            config.log_config = PathBuf::from(path);
        }

        if let Some(max) = lookup(MAX_OUTPUT_VAR) {
            let max: u64 = max
                .trim()
                .parse()
                .map_err(|e| format!("{MAX_OUTPUT_VAR}={max:?} is not a number: {e}"))?;
            config.max_output = (max > 0).then_some(max);
        }

        if let Some(color) = lookup(COLOR_VAR) {
            config.color = match color.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => return Err(format!("{COLOR_VAR}={other:?} is not a boolean").into()),
            };
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}
