mod common;

use common::TestEnv;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn list_backups_orders_newest_first_and_skips_malformed() {
    let env = TestEnv::new();
    let out = env.run_json(&["list-backups", "--backup-dir", env.backups_arg()]);
    assert_eq!(out["ok"], true);
    let items = out["data"].as_array().expect("listing array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["index"], 1);
    assert_eq!(items[0]["file_name"], "VIN123_ABS_20250101_010101.abt");
    assert_eq!(items[0]["captured_at"], "2025-01-01T01:01:01");
    assert_eq!(items[1]["index"], 2);
    assert_eq!(items[1]["file_name"], "VIN123_ABS_20240101_010101.abt");
}

#[test]
fn list_backups_in_missing_default_dir_is_empty() {
    let env = TestEnv::new();
    let out = env.run_json(&["list-backups"]);
    assert_eq!(out["data"], Value::Array(vec![]));
}

#[test]
fn parse_explicit_file_writes_all_exports() {
    let env = TestEnv::new();
    let file = env.backups.join("VIN123_ABS_20250101_010101.abt");
    let csv = env.work.join("out.csv");
    let json = env.work.join("out.json");
    let jsonl = env.work.join("out.jsonl");

    env.cmd()
        .args(["parse-backup", "--file"])
        .arg(&file)
        .arg("--out")
        .arg(&csv)
        .arg("--json-out")
        .arg(&json)
        .arg("--jsonl-out")
        .arg(&jsonl)
        .assert()
        .success()
        .stdout(contains("Processed VIN123_ABS_20250101_010101.abt"))
        .stdout(contains("JSONL output:"));

    assert_eq!(
        fs::read_to_string(&csv).expect("csv"),
        "offset,name,value,interpretation\n\
         0,first_uint32,3,Primary sample value\n\
         4,second_uint32,4,Secondary sample value\n"
    );

    let doc: Value = serde_json::from_str(&fs::read_to_string(&json).expect("json")).expect("doc");
    assert_eq!(doc[1]["name"], "second_uint32");
    assert_eq!(doc[1]["value"], 4);

    let body = fs::read_to_string(&jsonl).expect("jsonl");
    let rows: Vec<Value> = body
        .lines()
        .map(|l| serde_json::from_str(l).expect("jsonl row"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["offset"], 0);
    assert_eq!(rows[0]["value"], 3);
}

#[test]
fn parse_uses_default_csv_path_in_working_dir() {
    let env = TestEnv::new();
    let file = env.backups.join("VIN123_ABS_20240101_010101.abt");
    env.cmd()
        .args(["parse-backup", "--file"])
        .arg(&file)
        .assert()
        .success();
    let csv = fs::read_to_string(env.work.join("output_file.csv")).expect("default csv");
    assert!(csv.contains("first_uint32,1,"));
}

#[test]
fn interactive_selection_is_one_based_over_sorted_listing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["parse-backup", "--backup-dir", env.backups_arg()])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(contains("1: VIN123_ABS_20250101_010101.abt"))
        .stdout(contains("Processed VIN123_ABS_20240101_010101.abt"));
}

#[test]
fn interactive_selection_rejects_bad_input() {
    let env = TestEnv::new();
    env.cmd()
        .args(["parse-backup", "--backup-dir", env.backups_arg()])
        .write_stdin("3\n")
        .assert()
        .failure()
        .stderr(contains("out of range"));
    env.cmd()
        .args(["parse-backup", "--backup-dir", env.backups_arg()])
        .write_stdin("abc\n")
        .assert()
        .failure()
        .stderr(contains("valid integer"));
}

#[test]
fn parse_reports_missing_or_empty_backup_dir() {
    let env = TestEnv::new();
    env.cmd()
        .args(["parse-backup", "--backup-dir", "nowhere"])
        .assert()
        .failure()
        .stderr(contains("backup directory not found"));

    let empty = env.work.join("empty");
    fs::create_dir_all(&empty).expect("empty dir");
    env.cmd()
        .args(["parse-backup", "--backup-dir"])
        .arg(&empty)
        .assert()
        .failure()
        .stderr(contains("No .abt files found"));
}

#[test]
fn empty_backup_dir_names_configured_extension() {
    let env = TestEnv::new();
    env.write_config("backup_extension = \"bak\"\n");
    let empty = env.work.join("empty");
    fs::create_dir_all(&empty).expect("empty dir");
    env.cmd()
        .args(["parse-backup", "--backup-dir"])
        .arg(&empty)
        .assert()
        .failure()
        .stderr(contains("No .bak files found in directory"));
}

#[test]
fn parse_rejects_short_payload() {
    let env = TestEnv::new();
    let short = env.work.join("VIN123_ABS_20250101_010101.abt");
    fs::write(&short, b"1234").expect("write short payload");
    env.cmd()
        .args(["parse-backup", "--file"])
        .arg(&short)
        .assert()
        .failure()
        .stderr(contains("at least 8 bytes"));
    assert!(!env.work.join("output_file.csv").exists());
}

#[test]
fn decode_dtc_reports_known_and_inferred_codes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["decode-dtc", "--code", "p0-171", "--code", "C1234"])
        .assert()
        .success()
        .stdout(contains("Code: P0171"))
        .stdout(contains("Severity: high"))
        .stdout(contains("Title: Unknown/Unmapped DTC"))
        .stdout(contains("System: Chassis"));

    let out = env.run_json(&["decode-dtc", "--code", "U0121", "--code", "B0042"]);
    assert_eq!(out["data"][0]["provenance"], "known");
    assert_eq!(out["data"][0]["system"], "Network");
    assert_eq!(out["data"][1]["provenance"], "inferred");
    assert_eq!(out["data"][1]["system"], "Body");
}

#[test]
fn decode_dtc_fails_on_invalid_code() {
    let env = TestEnv::new();
    env.cmd()
        .args(["decode-dtc", "--code", "P0171", "--code", "NOT-A-DTC"])
        .assert()
        .failure()
        .stderr(contains("Invalid DTC format: NOT-A-DTC"));
}

#[test]
fn plan_change_tiers_follow_module() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "plan-change",
            "--module",
            "ABS",
            "--parameter",
            "TireSize",
            "--current",
            "235/65R17",
            "--target",
            "245/65R17",
        ])
        .assert()
        .success()
        .stdout(contains("Safety level: high"))
        .stdout(contains("Current -> Target: 235/65R17 -> 245/65R17"))
        .stdout(contains("Safety-critical module detected"));

    let out = env.run_json(&[
        "plan-change",
        "--module",
        "BCM",
        "--parameter",
        "DRL",
        "--current",
        "Off",
        "--target",
        "On",
    ]);
    assert_eq!(out["data"]["safety_tier"], "medium");
    assert_eq!(out["data"]["warnings"].as_array().expect("warnings").len(), 2);
}

#[test]
fn config_overrides_safety_critical_modules() {
    let env = TestEnv::new();
    env.write_config("safety_critical_modules = [\"bcm\"]\n");
    let out = env.run_json(&[
        "plan-change",
        "--module",
        "BCM",
        "--parameter",
        "DRL",
        "--current",
        "Off",
        "--target",
        "On",
    ]);
    assert_eq!(out["data"]["safety_tier"], "high");
}

#[test]
fn malformed_config_fails_fast() {
    let env = TestEnv::new();
    env.write_config("backup_dir = [");
    env.cmd()
        .args(["explain", "--list-topics"])
        .assert()
        .failure()
        .stderr(contains("invalid config file"));
}

#[test]
fn explain_topics() {
    let env = TestEnv::new();
    env.cmd()
        .args(["explain", "--list-topics"])
        .assert()
        .success()
        .stdout(contains("Supported topics:"))
        .stdout(contains("- trid"));

    env.cmd()
        .args(["explain", "--topic", "As-Built", "--topic", "ecc"])
        .assert()
        .success()
        .stdout(contains("Topic: As-Built"))
        .stdout(contains("Topic: Economized Central Configuration (ECC)"));

    env.cmd()
        .args(["explain", "--topic", "flux"])
        .assert()
        .failure()
        .stderr(contains("Unknown topic 'flux'"));

    env.cmd().arg("explain").assert().failure();
}

#[test]
fn trust_report_writes_json_file() {
    let env = TestEnv::new();
    let out = env.work.join("trust.json");
    env.cmd()
        .arg("trust-report")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Legitimacy score: 80/100"));
    let report: Value = serde_json::from_str(&fs::read_to_string(&out).expect("report")).expect("json");
    assert_eq!(report["legitimacy_score"], 80);
    assert_eq!(report["sources"].as_array().expect("sources").len(), 6);
}
