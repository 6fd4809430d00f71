use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

const EXTERNAL: &str = "6,5,11,12,14,3,16,15,13,7,2,18,1,10,8,17,4,9";
const INTERNAL: &str = "6 1 15 12 10 3 13 16 14 8 4 17 9 18 5 11 2 7";

fn hartman_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hartman"))
}

fn run(args: &[&str]) -> Output {
    Command::new(hartman_bin())
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run hartman")
}

fn run_json(args: &[&str]) -> Value {
    let out = run(args);
    assert!(
        out.status.success(),
        "hartman {:?} failed:\n{}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

#[test]
fn score_prints_world_indices() {
    let v = run_json(&["score", "--world", "external", EXTERNAL]);
    assert_eq!(v["world"], "external");
    assert_eq!(v["indices"]["total_deviation"]["value"], 26);
    assert_eq!(v["indices"]["q1"], 41);
    assert_eq!(v["weighted"].as_array().map(Vec::len), Some(18));
    assert_eq!(v["weighted"][0]["axiogram"]["base"]["position"], 2);
}

#[test]
fn score_summary_is_human_readable() {
    let out = run(&["score", "--world", "internal", "--summary", INTERNAL]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Mundo Interno"));
    assert!(text.contains("DIM-I"));
    assert!(text.contains("Q1 79  Q2 27"));
}

#[test]
fn rejected_input_exits_non_zero_with_the_engine_message() {
    let out = run(&["score", "--world", "external", "1,2,3"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("expected 18 responses, got 3"), "{stderr}");
}

#[test]
fn relate_reports_ratios_and_warnings() {
    let v = run_json(&["relate", "--external", EXTERNAL, "--internal", INTERNAL]);
    assert_eq!(v["relation"]["ratio1"]["value"], 1.93);
    assert_eq!(v["relation"]["ratio1"]["remarked"], false);
    assert_eq!(v["relation"]["dif_ratio"], 0.5);
    assert_eq!(v["formula_warnings"], serde_json::json!([2, 10, 14]));
}

#[test]
fn map_translates_quick_test_responses() {
    let v = run_json(&["map", "13,11,1,6,10,17,2,3,5,18,15,4,14,9,16,8,12,7"]);
    assert_eq!(
        v,
        serde_json::json!([3, 7, 8, 12, 9, 4, 18, 16, 14, 5, 2, 17, 1, 13, 11, 15, 6, 10])
    );
}

#[test]
fn battery_reads_a_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("battery.json");
    let ranks: Vec<String> = EXTERNAL
        .split(',')
        .chain(INTERNAL.split(' '))
        .map(str::to_string)
        .collect();
    fs::write(&path, format!("{{ \"responses\": [{}] }}", ranks.join(", "))).expect("write battery");

    let v = run_json(&["battery", path.to_str().expect("utf-8 path")]);
    assert_eq!(v["external"]["indices"]["q1"], 41);
    assert_eq!(v["internal"]["indices"]["q1"], 79);
    assert_eq!(v["sexual"], Value::Null);
    assert_eq!(v["relation"]["ratio2"]["value"], 1.8);
}

#[test]
fn battery_of_wrong_length_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.json");
    fs::write(&path, "[1, 2, 3]").expect("write battery");

    let out = run(&["battery", path.to_str().expect("utf-8 path")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("at least 36 responses, got 3"));
}

#[test]
fn explain_lists_six_valuations() {
    let v = run_json(&[
        "explain",
        "--external",
        "5,8,3,11,12,7,18,16,10,14,2,15,1,4,13,17,6,9",
        "--internal",
        "6,1,10,12,13,9,17,15,16,5,8,18,4,11,3,14,2,7",
    ]);
    assert_eq!(
        v,
        serde_json::json!([
            "Bloqueo severo",
            "Bloqueo severo",
            "Bloqueo severo",
            "Bloqueo severo",
            "Bien",
            "Bloqueo muy alto"
        ])
    );
}

#[test]
fn reject_config_turns_a_perfect_ranking_into_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("engine.json");
    fs::write(&config, r#"{ "zero_denominator": "reject" }"#).expect("write config");
    let canonical = "6,9,10,11,13,5,17,16,12,4,1,18,2,14,8,15,3,7";

    let ok = run_json(&["score", "--world", "sexual", canonical]);
    assert_eq!(ok["indices"]["imbalance_percent"]["value"], 0);

    let out = run(&[
        "--config",
        config.to_str().expect("utf-8 path"),
        "score",
        "--world",
        "sexual",
        canonical,
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("total deviation is zero"));
}

#[test]
fn catalog_overlays_texts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let texts = dir.path().join("texts.json");
    fs::write(
        &texts,
        r#"{ "external": [ { "position": 1, "phrase": "Una comida deliciosa" } ] }"#,
    )
    .expect("write texts");

    let v = run_json(&[
        "--texts",
        texts.to_str().expect("utf-8 path"),
        "catalog",
        "--world",
        "external",
    ]);
    let records = v.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["world"], "external");
    assert_eq!(records[0]["axiograms"].as_array().map(Vec::len), Some(18));
    assert_eq!(records[0]["axiograms"][0]["phrase"], "Una comida deliciosa");
    assert_eq!(records[0]["axiograms"][1]["phrase"], "");
}
