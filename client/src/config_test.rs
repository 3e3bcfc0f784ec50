use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

// =============================================================================
// attributes
// =============================================================================

#[test]
fn no_attributes_gives_defaults() {
    let config = ClientConfig::with_version(1, attrs(&[]));
    assert_eq!(config, Ok(ClientConfig::default()));
}

#[test]
fn attributes_override_defaults() {
    let config = ClientConfig::with_version(
        3,
        attrs(&[(ATTR_SOCKET_URL, "wss://poems.example/ws"), (ATTR_REFRESH, "append"), (ATTR_ACK_HUP, "true")]),
    );
    assert_eq!(
        config,
        Ok(ClientConfig {
            protocol_version: 3,
            socket_url: Some("wss://poems.example/ws".to_owned()),
            refresh: RefreshMode::Append,
            ack_liveness: true,
        })
    );
}

#[test]
fn blank_socket_url_is_treated_as_absent() {
    let config = ClientConfig::with_version(1, attrs(&[(ATTR_SOCKET_URL, "  ")]));
    assert_eq!(config.map(|c| c.socket_url), Ok(None));
}

#[test]
fn bare_ack_attribute_enables_acknowledgment() {
    let config = ClientConfig::with_version(1, attrs(&[(ATTR_ACK_HUP, "")]));
    assert_eq!(config.map(|c| c.ack_liveness), Ok(true));
}

#[test]
fn ack_attribute_accepts_false() {
    let config = ClientConfig::with_version(1, attrs(&[(ATTR_ACK_HUP, "0")]));
    assert_eq!(config.map(|c| c.ack_liveness), Ok(false));
}

#[test]
fn bad_ack_attribute_is_an_error() {
    let config = ClientConfig::with_version(1, attrs(&[(ATTR_ACK_HUP, "sometimes")]));
    assert_eq!(config, Err(ConfigError::AckHup("sometimes".to_owned())));
}

#[test]
fn bad_refresh_attribute_is_an_error() {
    let config = ClientConfig::with_version(1, attrs(&[(ATTR_REFRESH, "merge")]));
    assert!(matches!(config, Err(ConfigError::Refresh(_))));
}

#[test]
fn session_config_carries_switches() {
    let config = ClientConfig { refresh: RefreshMode::Append, ack_liveness: true, ..ClientConfig::default() };
    assert_eq!(config.session_config(), SessionConfig { refresh: RefreshMode::Append, ack_liveness: true });
}

// =============================================================================
// protocol version
// =============================================================================

#[test]
fn missing_build_version_defaults_to_one() {
    assert_eq!(parse_protocol_version(None), Ok(1));
}

#[test]
fn build_version_is_parsed() {
    assert_eq!(parse_protocol_version(Some(" 7 ")), Ok(7));
    assert_eq!(parse_protocol_version(Some("v7")), Err(ConfigError::ProtocolVersion("v7".to_owned())));
}

// =============================================================================
// socket url
// =============================================================================

#[test]
fn socket_url_follows_page_scheme() {
    assert_eq!(socket_url_for("http:", "localhost:3000"), "ws://localhost:3000/ws");
    assert_eq!(socket_url_for("https:", "poems.example"), "wss://poems.example/ws");
}

#[test]
fn explicit_socket_url_wins() {
    let config = ClientConfig { socket_url: Some("ws://relay:9000/ws".to_owned()), ..ClientConfig::default() };
    assert_eq!(config.socket_url("https:", "poems.example"), "ws://relay:9000/ws");
    assert_eq!(ClientConfig::default().socket_url("http:", "a:1"), "ws://a:1/ws");
}
