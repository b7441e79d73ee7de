use droidkit_domain::config::{DroidkitConfig, LogRotation};
use droidkit_domain::package::ApiLevel;
use droidkit_kernel::config::{ConfigError, load_config, load_droidkit_config};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_default_file_falls_back_to_defaults() {
    let cfg = load_droidkit_config(None::<&str>).expect("defaults should load");
    assert_eq!(cfg.memory.pause(), Duration::from_millis(500));
    assert_eq!(cfg.platform.api_level, ApiLevel::LATEST);
}

#[test]
#[serial]
fn explicit_file_is_required() {
    let tmp = tempdir().unwrap();
    let err = load_droidkit_config(Some(tmp.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
}

#[test]
#[serial]
fn toml_file_is_merged_over_defaults() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("droidkit.toml");
    fs::write(
        &path,
        r#"
[platform]
api_level = 27

[logging]
level = "debug"
rotation = "never"
"#,
    )
    .unwrap();

    let cfg: DroidkitConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.platform.api_level, ApiLevel(27));
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.rotation, LogRotation::Never);
    assert_eq!(cfg.memory.pause_ms, 500);
}
