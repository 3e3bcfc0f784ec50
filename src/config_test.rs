use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.words_file, PathBuf::from("words.txt"));
    assert_eq!(cfg.static_dir, PathBuf::from("client/static"));
    assert_eq!(cfg.protocol_version, 1);
    assert_eq!(cfg.hup_interval, Duration::from_secs(30));
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("WORDS_FILE", "/srv/words.txt"),
        ("STATIC_DIR", "/srv/www"),
        ("PROTOCOL_VERSION", " 3 "),
        ("HUP_INTERVAL_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.words_file, PathBuf::from("/srv/words.txt"));
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    assert_eq!(cfg.protocol_version, 3);
    assert_eq!(cfg.hup_interval, Duration::from_secs(5));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into(), expected: "a port number" });
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn negative_protocol_version_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PROTOCOL_VERSION", "-1")])).unwrap_err();
    assert!(err.to_string().contains("PROTOCOL_VERSION"));
}

#[test]
fn zero_hup_interval_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HUP_INTERVAL_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HUP_INTERVAL_SECS", .. }));
}
