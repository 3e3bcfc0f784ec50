//! Page configuration.
//!
//! The protocol version is baked in at build time from
//! `FRIDGE_PROTOCOL_VERSION`. Everything else comes from `data-*`
//! attributes on the `#fridge` container so one build can be served with
//! different settings:
//!
//! | Attribute | Values | Default |
//! |-----------|--------|---------|
//! | `data-socket-url` | websocket URL | `ws(s)://<host>/ws` |
//! | `data-refresh` | `replace`, `append` | `replace` |
//! | `data-ack-hup` | `true`, `false` (empty means `true`) | `false` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use fridge::registry::{ParseRefreshModeError, RefreshMode};
use fridge::session::SessionConfig;
use wire::ProtocolVersion;

pub const ATTR_SOCKET_URL: &str = "data-socket-url";
pub const ATTR_REFRESH: &str = "data-refresh";
pub const ATTR_ACK_HUP: &str = "data-ack-hup";

/// Websocket path served by the relay.
pub const SOCKET_PATH: &str = "/ws";

const DEFAULT_PROTOCOL_VERSION: ProtocolVersion = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("FRIDGE_PROTOCOL_VERSION must be a non-negative integer, got {0:?}")]
    ProtocolVersion(String),
    #[error(transparent)]
    Refresh(#[from] ParseRefreshModeError),
    #[error("{ATTR_ACK_HUP} must be true or false, got {0:?}")]
    AckHup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub protocol_version: ProtocolVersion,
    /// Explicit socket URL. `None` derives one from the page location.
    pub socket_url: Option<String>,
    pub refresh: RefreshMode,
    pub ack_liveness: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { protocol_version: DEFAULT_PROTOCOL_VERSION, socket_url: None, refresh: RefreshMode::Replace, ack_liveness: false }
    }
}

impl ClientConfig {
    /// Build a config from the compiled-in protocol version and an attribute
    /// lookup (usually `Element::get_attribute` on `#fridge`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable build version or attribute.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::with_version(parse_protocol_version(option_env!("FRIDGE_PROTOCOL_VERSION"))?, attr)
    }

    /// Like [`ClientConfig::from_attributes`] with an explicit protocol version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable attribute.
    pub fn with_version(protocol_version: ProtocolVersion, attr: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let socket_url = attr(ATTR_SOCKET_URL).map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        let refresh = match attr(ATTR_REFRESH) {
            Some(raw) => raw.parse()?,
            None => RefreshMode::default(),
        };
        let ack_liveness = match attr(ATTR_ACK_HUP) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::AckHup(raw))?,
            None => false,
        };
        Ok(Self { protocol_version, socket_url, refresh, ack_liveness })
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig { refresh: self.refresh, ack_liveness: self.ack_liveness }
    }

    /// The configured socket URL, or the relay endpoint on the page's host.
    #[must_use]
    pub fn socket_url(&self, page_protocol: &str, host: &str) -> String {
        self.socket_url.clone().unwrap_or_else(|| socket_url_for(page_protocol, host))
    }
}

/// Websocket URL for a page served from `host` over `page_protocol`
/// (`"https:"` selects `wss`).
#[must_use]
pub fn socket_url_for(page_protocol: &str, host: &str) -> String {
    let scheme = if page_protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{SOCKET_PATH}")
}

fn parse_protocol_version(raw: Option<&str>) -> Result<ProtocolVersion, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PROTOCOL_VERSION),
        Some(s) => s.trim().parse().map_err(|_| ConfigError::ProtocolVersion(s.to_owned())),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
