use cfgattr_domain::config::{LogFormat, OutputConfig};
use cfgattr_domain::{CliOverrides, Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.output.resolv_conf_path, "/run/cfgattr/resolv.conf");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_sections_use_defaults() {
    let config = Config::from_toml(
        r#"
        [logging]
        level = "debug"
    "#,
    )
    .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.output.header, OutputConfig::default().header);
}

#[test]
fn test_config_json_log_format() {
    let config = Config::from_toml(
        r#"
        [logging]
        format = "json"

        [output]
        resolv_conf_path = "/tmp/vpn-resolv.conf"
    "#,
    )
    .unwrap();

    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.output.resolv_conf_path, "/tmp/vpn-resolv.conf");
}

#[test]
fn test_config_parse_error() {
    let result = Config::from_toml("[logging\nlevel = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_explicit_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfgattr.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

    let overrides = CliOverrides {
        log_level: Some("trace".to_string()),
        resolv_conf_path: Some("/tmp/out.conf".to_string()),
    };
    let config = Config::load(path.to_str(), overrides).unwrap();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.output.resolv_conf_path, "/tmp/out.conf");
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(Some("/nonexistent/cfgattr.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfgattr.toml");
    std::fs::write(
        &path,
        "[output]\nresolv_conf_path = \"/var/run/vpn/resolv.conf\"\n",
    )
    .unwrap();

    let loaded = Config::load(path.to_str(), CliOverrides::default()).unwrap();
    assert_eq!(loaded.output.resolv_conf_path, "/var/run/vpn/resolv.conf");
}

#[test]
fn test_validate_rejects_empty_output_path() {
    let mut config = Config::default();
    config.output.resolv_conf_path = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_multiline_header() {
    let mut config = Config::default();
    config.output.header = "line one\nline two".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}
