//! Integration tests for configuration management

use uni_scout::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.store.path.is_empty(),
        "Default store path should not be empty"
    );
    assert!(
        !config.user.id.is_empty(),
        "Default user id should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[store]
path = "./store.json"

[user]
id = "student-42"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.store.path, "./store.json");
    assert_eq!(config.user.id, "student-42");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_missing_sections() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "warn");
    assert!(config.store.path.is_empty());
    assert!(config.user.id.is_empty());
}

#[test]
fn test_config_expands_variables() {
    let toml_str = r#"
[logging]
level = "info"

[store]
path = "$UNI_SCOUT/data/store.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert!(
        !config.store.path.contains("$UNI_SCOUT"),
        "$UNI_SCOUT should be expanded, got '{}'",
        config.store.path
    );
    assert!(config.store.path.ends_with("data/store.json"));
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml("[logging]\nlevel = \"error\"").unwrap();
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    // Explicitly set value is preserved
    assert_eq!(config.logging.level, "error");
    // Empty fields are filled from defaults
    assert_eq!(config.store.path, defaults.store.path);
    assert_eq!(config.user.id, defaults.user.id);
}

#[test]
fn test_merge_defaults_no_change_when_complete() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        store_path: Some("/custom/store.json".to_string()),
        user_id: Some("override-user".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.store.path, "/custom/store.json");
    assert_eq!(config.user.id, "override-user");
}

#[test]
fn test_apply_overrides_none_leaves_config_untouched() {
    let mut config = Config::from_defaults();
    let before_store = config.store.path.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.store.path, before_store);
}

#[test]
fn test_get_known_keys() {
    let config = Config::from_defaults();

    assert!(config.get("level").is_some());
    assert!(config.get("store_path").is_some());
    assert!(config.get("store-path").is_some());
    assert!(config.get("user_id").is_some());
    assert!(config.get("reports_dir").is_some());
    assert!(config.get("nonexistent").is_none());
}

#[test]
fn test_set_and_unset_round_trip() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("user_id", "temp-user").unwrap();
    assert_eq!(config.get("user_id"), Some("temp-user".to_string()));

    config.unset("user_id", &defaults).unwrap();
    assert_eq!(config.user.id, defaults.user.id);
}

#[test]
fn test_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_display_includes_all_sections() {
    let config = Config::from_defaults();
    let shown = config.to_string();

    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[store]"));
    assert!(shown.contains("[user]"));
    assert!(shown.contains("[paths]"));
}
