// Config loading and validation tests

use deviceinfo::config::AppConfig;

const VALID_CONFIG: &str = r#"
[output]
format = "json"

[probes]
battery = true
ip_address = false
security = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.output.format, "json");
    assert!(config.probes.battery);
    assert!(!config.probes.ip_address);
    assert!(config.probes.security);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.output.format, "pretty");
    assert!(config.probes.battery);
    assert!(config.probes.ip_address);
    assert!(config.probes.security);
}

#[test]
fn test_config_partial_probes_section_keeps_other_defaults() {
    let config = AppConfig::load_from_str("[probes]\nbattery = false\n").expect("partial config");
    assert!(!config.probes.battery);
    assert!(config.probes.ip_address);
    assert!(config.probes.security);
}

#[test]
fn test_config_validation_rejects_unknown_format() {
    let bad = VALID_CONFIG.replace("format = \"json\"", "format = \"xml\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("output.format"));
}

#[test]
fn test_config_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe {
        std::env::set_var(
            "CONFIG_FILE",
            dir.path().join("missing.toml").to_str().unwrap(),
        )
    };
    let missing_result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };

    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.output.format, "json");

    // a missing file falls back to the defaults
    let config = missing_result.expect("load with missing file");
    assert_eq!(config.output.format, "pretty");
}
