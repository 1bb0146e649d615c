#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn placement(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("placement").expect("binary should compile");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

const REFERENCE_STUDENT: [&str; 14] = [
    "--iq",
    "150",
    "--cgpa",
    "8.5",
    "--academic",
    "8",
    "--internship",
    "1",
    "--extra",
    "7",
    "--comm",
    "8",
    "--projects",
    "4",
];

#[test]
fn predict_reports_excellent_prospects() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .arg("predict")
        .args(REFERENCE_STUDENT)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Placement probability: 99.6%"))
        .stdout(predicate::str::contains("Tier: Excellent Prospects"));
}

#[test]
fn predict_reports_good_prospects() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args([
            "predict",
            "--iq",
            "120",
            "--cgpa",
            "8",
            "--academic",
            "7",
            "--internship",
            "1",
            "--extra",
            "6",
            "--comm",
            "7",
            "--projects",
            "3",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Placement probability: 60.1%"))
        .stdout(predicate::str::contains("Tier: Good Prospects"));
}

#[test]
fn predict_with_missing_field_exits_with_code_2() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["predict", "--iq", "150", "--cgpa", "8.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "form incomplete, missing: academic, internship, comm, extra, projects",
        ));
}

#[test]
fn predict_out_of_range_value_leaves_field_empty() {
    let home = TempDir::new().expect("temp dir should be created");
    let mut args = REFERENCE_STUDENT.to_vec();
    args[13] = "51";
    placement(&home)
        .arg("predict")
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "rejected --projects value \"51\": out of range",
        ))
        .stderr(predicate::str::contains("missing: projects"));
}

#[test]
fn predict_rejects_delay_over_limit() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .arg("predict")
        .args(REFERENCE_STUDENT)
        .args(["--delay-ms", "999999999"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--delay-ms"));
}

#[test]
fn predict_accepts_zero_delay() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .arg("predict")
        .args(REFERENCE_STUDENT)
        .args(["--delay-ms", "0"])
        .assert()
        .code(0);
}

#[test]
fn predict_json_format() {
    let home = TempDir::new().expect("temp dir should be created");
    let output = placement(&home)
        .arg("predict")
        .args(REFERENCE_STUDENT)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["tier"], "excellent");
    assert_eq!(value["features"][0], 150.0);
    let percentage = value["score"]["percentage"]
        .as_f64()
        .expect("percentage should be a number");
    assert!((percentage - 99.62087790857966).abs() < 1e-6);
}

#[test]
fn score_zero_vector_is_near_zero() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["score", "0", "0", "0", "0", "0", "0", "0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Placement probability: 0.0%"))
        .stdout(predicate::str::contains("raw linear score: -28.841797"))
        .stdout(predicate::str::contains("Needs Improvement"));
}

#[test]
fn score_accepts_values_outside_form_ranges() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["score", "500", "20", "-3", "1", "1", "1", "100"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Placement probability: 100.0%"));
}

#[test]
fn check_accepts_exact_max() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["check", "projects", "50"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("accepted"));
}

#[test]
fn check_rejects_one_above_max() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["check", "iq", "201"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("rejected"))
        .stdout(predicate::str::contains("out of range (range 0-200)"));
}

#[test]
fn check_accepts_empty_value() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["check", "academic", ""])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("accepted"));
}

#[test]
fn check_unknown_field_exits_with_code_2() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["check", "height", "180"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown field: height"));
}

#[test]
fn interactive_session_scores_from_stdin() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .arg("interactive")
        .write_stdin(
            "iq 150\ncgpa 8.5\nacademic 8\ninternship 1\nextra 7\ncomm 8\nprojects 4\nsubmit\nquit\n",
        )
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Placement probability: 99.6%"));
}

#[test]
fn project_config_selects_json_output() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("placement.toml"),
        r#"
[output]
format = "json"
"#,
    )
    .expect("project config should write");

    placement(&home)
        .arg("predict")
        .args(REFERENCE_STUDENT)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"tier\": \"excellent\""));
}

#[test]
fn invalid_config_exits_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("placement.toml"),
        r#"
[scoring]
missing_fields = "guess"
"#,
    )
    .expect("project config should write");

    placement(&home)
        .arg("fields")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn explicit_missing_config_exits_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    placement(&home)
        .args(["--config", "absent.toml", "fields"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}
