// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn mockup(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mockup").unwrap();
    cmd.arg("--config-dir").arg(config_dir).env_remove("RUST_LOG");
    cmd
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path
}

fn compose_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn tiers_lists_the_canonical_table() {
    let dir = TempDir::new().unwrap();
    mockup(dir.path())
        .arg("tiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("xl").and(predicate::str::contains("1.75")));
}

#[test]
fn apps_lists_builtins() {
    let dir = TempDir::new().unwrap();
    mockup(dir.path())
        .arg("apps")
        .assert()
        .success()
        .stdout(predicate::str::contains("BuiltInMessenger").and(predicate::str::contains("Whatsapp")));
}

#[test]
fn dimensions_scale_by_tier() {
    let dir = TempDir::new().unwrap();
    mockup(dir.path())
        .args(["dimensions", "--size", "lg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.8375").and(predicate::str::contains("3.0625")));
}

#[test]
fn compose_bare_device_has_no_app() {
    let dir = TempDir::new().unwrap();
    let json = compose_json(mockup(dir.path()).args([
        "compose",
        "--size",
        "xs",
        "--rotation",
        "landscape",
        "--color-mode",
        "dark",
    ]));
    assert_eq!(json["sizeTier"], "xs");
    assert_eq!(json["rotation"], "landscape");
    assert_eq!(json["colorMode"], "dark");
    assert_eq!(json["dimensions"]["width"], 14.525);
    assert!(json["app"].is_null());
    assert!(json.get("error").is_none());
}

#[test]
fn compose_with_app_file() {
    let dir = TempDir::new().unwrap();
    let app = write_json(
        &dir,
        "app.json",
        &json!({
            "name": "BuiltInMessenger",
            "options": { "messages": [{ "isOutgoing": true, "text": "hi" }] }
        }),
    );
    let json = compose_json(mockup(dir.path()).arg("compose").arg("--app").arg(&app));
    assert_eq!(json["app"]["name"], "BuiltInMessenger");
    assert!(json.get("error").is_none());
}

#[test]
fn unknown_app_still_exits_zero_with_error() {
    let dir = TempDir::new().unwrap();
    let app = write_json(&dir, "app.json", &json!({ "name": "Telegram", "options": {} }));
    let json = compose_json(mockup(dir.path()).arg("compose").arg("--app").arg(&app));
    assert!(json["app"].is_null());
    assert_eq!(json["error"]["kind"], "appNotFound");
    assert_eq!(json["error"]["name"], "Telegram");
}

#[test]
fn outline_format_shows_the_tree() {
    let dir = TempDir::new().unwrap();
    mockup(dir.path())
        .args(["compose", "--format", "outline"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Frame").and(predicate::str::contains("  Bezel")));
}

#[test]
fn device_file_is_overridden_by_flags() {
    let dir = TempDir::new().unwrap();
    let device = write_json(
        &dir,
        "device.json",
        &json!({ "sizeTier": "xl", "colorMode": "dark" }),
    );
    let json = compose_json(
        mockup(dir.path())
            .arg("compose")
            .arg("--device")
            .arg(&device)
            .args(["--size", "sm"]),
    );
    assert_eq!(json["sizeTier"], "sm");
    assert_eq!(json["colorMode"], "dark");
}

#[test]
fn device_file_with_non_string_tier_falls_back() {
    let dir = TempDir::new().unwrap();
    let device = write_json(
        &dir,
        "device.json",
        &json!({ "sizeTier": 3, "rotation": null, "colorMode": "dark" }),
    );
    let json = compose_json(mockup(dir.path()).arg("compose").arg("--device").arg(&device));
    assert_eq!(json["sizeTier"], "md");
    assert_eq!(json["rotation"], "portrait");
    assert_eq!(json["colorMode"], "dark");
}

#[test]
fn saved_prefs_feed_compose() {
    let dir = TempDir::new().unwrap();
    let app = write_json(
        &dir,
        "app.json",
        &json!({ "name": "Whatsapp", "options": { "messages": [] } }),
    );
    mockup(dir.path())
        .args(["prefs", "save", "--size", "lg", "--no-shadow"])
        .arg("--app")
        .arg(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("device_prefs.json"));
    assert!(dir.path().join("device_prefs.json").is_file());

    mockup(dir.path())
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sizeTier\": \"lg\""));

    let json = compose_json(mockup(dir.path()).arg("compose"));
    assert_eq!(json["sizeTier"], "lg");
    assert_eq!(json["app"]["name"], "Whatsapp");
    assert!(json["chrome"].get("shadow").is_none());

    let json = compose_json(mockup(dir.path()).args(["compose", "--no-app"]));
    assert!(json["app"].is_null());
}

#[test]
fn corrupt_prefs_are_ignored_by_compose_but_fail_show() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("device_prefs.json"), b"{ nope").unwrap();

    let json = compose_json(mockup(dir.path()).arg("compose"));
    assert_eq!(json["sizeTier"], "md");

    mockup(dir.path())
        .args(["prefs", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading saved prefs"));
}

#[test]
fn unreadable_app_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    mockup(dir.path())
        .args(["compose", "--app"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}
