#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn droidkit() -> Command {
    let mut cmd = Command::cargo_bin("droidkit").expect("droidkit binary");
    cmd.env_remove("RUST_LOG").arg("--quiet");
    cmd
}

#[test]
fn slug_prints_lowercase_hyphenated_text() {
    droidkit().args(["slug", "Crème Brûlée  Recipe"]).assert().success().stdout("creme-brulee--recipe\n");
}

#[test]
fn class_name_prints_descriptor() {
    droidkit().args(["class-name", " com.example.App "]).assert().success().stdout("Lcom/example/App\n");
}

#[test]
fn hash_defaults_to_sha256() {
    droidkit()
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD\n");
}

#[test]
fn hash_reads_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("input.txt");
    fs::write(&path, "abc")?;

    droidkit()
        .args(["hash", "-a", "md5", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("900150983CD24FB0D6963F7D28E17F72\n");
    Ok(())
}

#[test]
fn hash_rejects_unknown_algorithm() {
    droidkit()
        .args(["hash", "-a", "NOT-A-REAL-ALGO", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOT-A-REAL-ALGO"));
}

#[test]
fn date_formats_epoch_millis() {
    droidkit()
        .args(["date", "--millis", "1709622489123"])
        .assert()
        .success()
        .stdout("2024-03-05T07:08:09.123+0000\n");
}

#[test]
fn date_defaults_to_now() {
    let pattern = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}\+0000\n$";
    droidkit().arg("date").assert().success().stdout(predicate::str::is_match(pattern).unwrap());
}

#[test]
fn net_reads_fake_sysfs() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let eth = root.path().join("eth0");
    fs::create_dir(&eth)?;
    fs::write(eth.join("operstate"), "up\n")?;
    fs::write(eth.join("carrier"), "1\n")?;
    fs::write(eth.join("type"), "1\n")?;

    droidkit().args(["net", "--sysfs-root"]).arg(root.path()).assert().success().stdout("online\n");

    let output = droidkit().args(["net", "--json", "--sysfs-root"]).arg(root.path()).output()?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["online"], true);
    assert_eq!(report["network"]["interface"], "eth0");
    Ok(())
}

#[test]
fn net_json_flag_matches_reported_network() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let eth = root.path().join("eth0");
    fs::create_dir(&eth)?;
    fs::write(eth.join("operstate"), "up\n")?;
    fs::write(eth.join("carrier"), "0\n")?;

    let output = droidkit().args(["net", "--json", "--sysfs-root"]).arg(root.path()).output()?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["network"]["interface"], "eth0");
    assert_eq!(report["network"]["state"], 2);
    assert_eq!(report["online"], false);
    Ok(())
}

#[test]
fn net_without_interfaces_is_offline() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    droidkit().args(["net", "--sysfs-root"]).arg(root.path()).assert().success().stdout("offline\n");
    Ok(())
}

#[test]
fn copy_streams_file_and_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("source.bin");
    let destination = dir.path().join("copy.bin");
    let piped = dir.path().join("piped.bin");
    fs::write(&source, [0_u8, 1, 2, 255])?;

    droidkit().arg("copy").arg(&source).arg(&destination).assert().success().stdout("4\n");
    assert_eq!(fs::read(&destination)?, [0_u8, 1, 2, 255]);

    droidkit().arg("copy").arg("-").arg(&piped).write_stdin("hello").assert().success().stdout("5\n");
    assert_eq!(fs::read_to_string(&piped)?, "hello");
    Ok(())
}

#[test]
fn copy_reports_missing_source() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    droidkit()
        .arg("copy")
        .arg(dir.path().join("missing"))
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open source"));
    Ok(())
}

#[test]
fn version_prefers_name_then_code() {
    droidkit()
        .args(["version", "--package", "a.b", "--version-name", "1.2.3", "--version-code", "7"])
        .assert()
        .success()
        .stdout("1.2.3\n");

    droidkit()
        .args(["version", "--package", "a.b", "--version-code", "7"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn version_code_depends_on_api_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest = dir.path().join("package.json");
    fs::write(
        &manifest,
        r#"{"packageName":"a.b","versionCode":7,"longVersionCode":4294967303}"#,
    )?;

    droidkit()
        .args(["version", "--code", "--api-level", "28", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout("4294967303\n");

    droidkit()
        .args(["version", "--code", "--api-level", "27", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout("7\n");
    Ok(())
}

#[test]
fn bundle_prints_typed_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = droidkit().args(["bundle", "count=3", "ratio=0.5", "debug=true", "name=demo"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["count"]["int"], 3);
    assert_eq!(json["ratio"]["float"], 0.5);
    assert_eq!(json["debug"]["boolean"], true);
    assert_eq!(json["name"]["string"], "demo");
    Ok(())
}

#[test]
fn clean_honours_pause_override() {
    droidkit().args(["clean", "--pause-ms", "1"]).assert().success();
}

#[test]
fn config_file_sets_platform_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("droidkit.toml");
    fs::write(&config, "[platform]\napi_level = 21\n")?;

    droidkit()
        .args(["version", "--code", "--package", "a.b", "--version-code", "7", "--long-version-code", "99", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("7\n");
    Ok(())
}

#[test]
fn missing_config_file_fails() {
    droidkit()
        .args(["slug", "x", "--config", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
