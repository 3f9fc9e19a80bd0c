//! Integration tests for command output
//!
//! These tests run the binary and check that JSON output carries the
//! dashboard state the commands produced.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fra-atlas"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("FRA_ATLAS_INITIAL_STATE")
        .env_remove("FRA_ATLAS_SEARCH_DELAY_MS")
        .env_remove("FRA_ATLAS_HISTORY_CAPACITY")
        .env_remove("FRA_ATLAS_SIDEBAR_OPEN")
        .env_remove("FRA_ATLAS_ANALYTICS_OPEN")
        .output()
        .expect("Failed to execute command")
}

fn json_data(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    parsed["data"].clone()
}

#[test]
fn test_status_json_has_default_view() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["status", "--json"]);

    assert!(output.status.success(), "Command should succeed");
    let data = json_data(&output);
    assert_eq!(data["zoom"], "5.0x");
    assert_eq!(data["state_label"], "Madhya Pradesh");
    assert_eq!(data["dashboard"]["view"]["longitude"], 77.1025);
    assert_eq!(data["dashboard"]["view"]["pitch"], 0.0);
}

#[test]
fn test_state_flag_focuses_state() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["--state", "tripura", "status", "--json"]);

    let data = json_data(&output);
    assert_eq!(data["dashboard"]["selected_state"], "tripura");
}

#[test]
fn test_unknown_state_fails() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["--state", "atlantis", "status"]);

    assert!(!output.status.success(), "Unknown state should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("atlantis"));
}

#[test]
fn test_states_json_lists_four_states() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["states", "--json"]);

    let data = json_data(&output);
    let states = data.as_array().unwrap();
    assert_eq!(states.len(), 4);
    assert_eq!(states[0]["id"], "madhya-pradesh");
    assert_eq!(states[0]["selected"], true);
    assert_eq!(states[1]["stats"]["fraApplications"], "8,456");
}

#[test]
fn test_layers_json_reports_default_visibility() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["layers", "--json"]);

    let data = json_data(&output);
    assert_eq!(data["visible"], serde_json::json!(["satellite", "forest", "boundaries"]));
    assert_eq!(data["layers"].as_array().unwrap().len(), 5);
}

#[test]
fn test_replay_applies_actions_in_order() {
    let dir = TempDir::new().unwrap();

    let output = run(
        &dir,
        &["replay", "state tripura", "zoom-in", "toggle-3d", "toggle-layer terrain", "--json"],
    );

    assert!(output.status.success(), "Command should succeed");
    let data = json_data(&output);
    let view = &data["dashboard"]["view"];
    assert_eq!(view["longitude"], 91.9882);
    assert_eq!(view["zoom"], 8.0);
    assert_eq!(view["pitch"], 60.0);
}

#[test]
fn test_replay_records_failed_steps() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["replay", "toggle-layer rivers", "zoom-out", "--json"]);

    assert!(output.status.success(), "Lenient replay should succeed");
    let data = json_data(&output);
    assert_eq!(data["steps"][0]["ok"], false);
    assert_eq!(data["steps"][1]["ok"], true);
    assert_eq!(data["dashboard"]["view"]["zoom"], 4.0);
}

#[test]
fn test_replay_strict_stops_on_error() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["replay", "--strict", "state atlantis", "zoom-in"]);

    assert!(!output.status.success(), "Strict replay should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Action 'state atlantis' failed"));
}

#[test]
fn test_replay_reads_action_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("tour.txt");
    std::fs::write(&script, "# odisha tour\nstate odisha\nclick\n").unwrap();

    let output = run(&dir, &["replay", "--file", script.to_str().unwrap(), "--json"]);

    let data = json_data(&output);
    let selection = &data["dashboard"]["selection"];
    assert_eq!(selection["name"], "Sample Forest Area");
    assert_eq!(selection["coordinates"], serde_json::json!([85.0985, 20.9517]));
    assert_eq!(data["dashboard"]["view"]["zoom"], 12.0);
}

#[test]
fn test_search_waits_for_completion() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["--search-delay-ms", "10", "search", "Kanha", "--json"]);

    let data = json_data(&output);
    assert_eq!(data["query"], "Kanha");
    assert_eq!(data["is_loading"], false);
    assert_eq!(data["history"][0], "Kanha");
    assert_eq!(data["suggestions"][0]["name"], "Kanha National Park");
}

#[test]
fn test_config_file_is_picked_up_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fra-atlas.toml"), "initial_state = \"telangana\"\n").unwrap();

    let output = run(&dir, &["config", "--json"]);

    let data = json_data(&output);
    let entry = data
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["key"] == "initial_state")
        .cloned()
        .unwrap();
    assert_eq!(entry["value"], "telangana");
    assert_eq!(entry["source"], "file");
}
