use ci_smoke::checks::SkipPolicy;
use ci_smoke::config::{load_settings, Settings};
use ci_smoke::utils::ConfigError;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
skip_policy = "lenient"

[ping]
enabled = false

[tcp]
connect_timeout_secs = 3

[[services]]
name = "registry"
host = "127.0.0.1"
port = 5000
"#
    )
    .unwrap();

    let settings = Settings::load_from_file(file.path()).unwrap();
    assert!(!settings.ping.enabled);
    assert_eq!(settings.tcp.connect_timeout_secs, 3);
    assert_eq!(settings.services.len(), 1);
    assert_eq!(settings.services[0].name, "registry");
    assert_eq!(settings.skip_policy, SkipPolicy::Lenient);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings(Some(dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[services]\nname = ").unwrap();
    let err = Settings::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_example_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/ci-smoke.example.toml");
    let settings = Settings::load_from_file(path).unwrap();
    let defaults = Settings::default();
    assert_eq!(settings.services, defaults.services);
    assert_eq!(settings.ping.host, defaults.ping.host);
    assert_eq!(settings.ping.timeout_secs, defaults.ping.timeout_secs);
    assert_eq!(settings.tcp.connect_timeout_secs, defaults.tcp.connect_timeout_secs);
    assert_eq!(settings.skip_policy, SkipPolicy::Strict);
}
