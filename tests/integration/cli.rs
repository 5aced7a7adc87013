//! Integration tests for the `sortviz` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn sortviz() -> Command {
    Command::cargo_bin("sortviz").expect("binary builds")
}

#[test]
fn test_trace_prints_history_json() {
    let output = sortviz()
        .args(["trace", "--algorithm", "bubble", "5", "3", "8", "1"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let history = json["history"].as_array().unwrap();
    assert_eq!(history[0]["array"], serde_json::json!([5, 3, 8, 1]));
    assert_eq!(
        history.last().unwrap()["array"],
        serde_json::json!([1, 3, 5, 8])
    );
}

#[test]
fn test_trace_stats_only() {
    sortviz()
        .args(["trace", "-a", "insertion", "--stats-only", "4", "4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"swaps\":0"));
}

#[test]
fn test_trace_accepts_negative_values() {
    sortviz()
        .args(["trace", "-a", "quick", "--stats-only", "3", "-2", "1"])
        .assert()
        .success();
}

#[test]
fn test_trace_random_input() {
    let output = sortviz()
        .args(["trace", "-a", "heap", "--random", "10"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let last = json["history"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["array"].as_array().unwrap().len(), 10);
}

#[test]
fn test_unknown_algorithm_fails() {
    sortviz()
        .args(["trace", "-a", "bogo", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_radix_negative_input_fails() {
    sortviz()
        .args(["trace", "-a", "radix", "1", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_trace_reversed_input() {
    let output = sortviz()
        .args(["trace", "-a", "bubble", "--random", "4", "--kind", "reversed"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["history"][0]["array"], serde_json::json!([4, 3, 2, 1]));
}
