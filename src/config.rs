//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use wire::ProtocolVersion;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WORDS_FILE: &str = "words.txt";
pub const DEFAULT_STATIC_DIR: &str = "client/static";
pub const DEFAULT_PROTOCOL_VERSION: ProtocolVersion = 1;
pub const DEFAULT_HUP_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub words_file: PathBuf,
    pub static_dir: PathBuf,
    pub protocol_version: ProtocolVersion,
    pub hup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            words_file: PathBuf::from(DEFAULT_WORDS_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            protocol_version: DEFAULT_PROTOCOL_VERSION,
            hup_interval: Duration::from_secs(DEFAULT_HUP_INTERVAL_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WORDS_FILE`: default `words.txt`
    /// - `STATIC_DIR`: default `client/static`
    /// - `PROTOCOL_VERSION`: default 1
    /// - `HUP_INTERVAL_SECS`: default 30, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = parse_var(&lookup, "PORT", "a port number")?.unwrap_or(defaults.port);
        let protocol_version =
            parse_var(&lookup, "PROTOCOL_VERSION", "a non-negative integer")?.unwrap_or(defaults.protocol_version);
        let hup_secs: u64 =
            parse_var(&lookup, "HUP_INTERVAL_SECS", "a positive integer")?.unwrap_or(DEFAULT_HUP_INTERVAL_SECS);
        if hup_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "HUP_INTERVAL_SECS",
                value: "0".into(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            port,
            words_file: lookup("WORDS_FILE").map_or(defaults.words_file, PathBuf::from),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            protocol_version,
            hup_interval: Duration::from_secs(hup_secs),
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim().parse::<T>().map(Some).map_err(|_| ConfigError::Invalid { var, value: raw, expected })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
