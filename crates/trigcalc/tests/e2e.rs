//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn trigcalc() -> Command {
    let mut cmd = Command::cargo_bin("trigcalc").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("TRIGCALC_ANGLE")
        .env_remove("TRIGCALC_TERMS")
        .env_remove("TRIGCALC_MODULE")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = trigcalc().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn help_flag() {
    trigcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Taylor"));
}

#[test]
fn version_flag() {
    trigcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trigcalc"));
}

#[test]
fn report_has_three_panels() {
    trigcalc()
        .args(["-a", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Taylor Series (10 terms) ---"))
        .stdout(predicate::str::contains("--- Lookup Table ---"))
        .stdout(predicate::str::contains("--- Standard Library ---"))
        .stdout(predicate::str::contains("0.866025403784439"));
}

#[test]
fn quiet_prints_six_values() {
    let output = trigcalc().args(["-a", "90", "-q"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "1");
    assert_eq!(lines[3], "6.12323399573677e-17");
    assert_eq!(lines[4], "1");
    assert_eq!(lines[5], "6.12323399573677e-17");
}

#[test]
fn non_integer_angle_has_no_lookup() {
    trigcalc()
        .args(["-a", "45.5", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A (non-integer angle)").count(2));
}

#[test]
fn negative_angle_wraps_in_table() {
    let json = json_stdout(&["-a", "-90", "--json"]);
    assert_eq!(json["display"]["sin_lookup"], "-1");
    assert_eq!(json["display"]["sin_std"], "-1");
}

#[test]
fn invalid_angle_exit_code() {
    trigcalc()
        .args(["-a", "abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid Input: Please enter a valid angle"));
}

#[test]
fn infinite_angle_rejected() {
    trigcalc().args(["-a", "inf"]).assert().code(2);
}

#[test]
fn invalid_terms_fall_back_to_default() {
    for terms in ["abc", "0", "-5", ""] {
        let json = json_stdout(&["-a", "30", "-t", terms, "--json"]);
        assert_eq!(json["terms"], 10, "terms {terms:?}");
    }
}

#[test]
fn one_term_gives_first_order() {
    let json = json_stdout(&["-a", "30", "-t", "1", "--json"]);
    assert_eq!(json["display"]["cos_taylor"], "1");
    assert_eq!(json["display"]["sin_taylor"], "0.523598775598299");
}

#[test]
fn unknown_module_reports_both_warnings() {
    trigcalc()
        .args(["-a", "30", "--module", "nonexistent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Failed to load trigonometry library: module not found: nonexistent",
        ))
        .stderr(predicate::str::contains("Library not loaded properly"));
}

#[test]
fn invalid_angle_checked_before_module() {
    trigcalc()
        .args(["-a", "x", "--module", "nonexistent"])
        .assert()
        .code(2);
}

#[test]
fn builtin_alias() {
    trigcalc()
        .args(["-a", "0", "--module", "builtin", "-q"])
        .assert()
        .success();
}

#[test]
fn missing_angle_is_config_error() {
    trigcalc().assert().code(4);
}

#[test]
fn env_angle_and_terms() {
    let output = trigcalc()
        .env("TRIGCALC_ANGLE", "180")
        .env("TRIGCALC_TERMS", "3")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["angle"], 180.0);
    assert_eq!(json["terms"], 3);
    assert_eq!(json["display"]["cos_std"], "-1");
}

#[test]
fn details_mode() {
    trigcalc()
        .args(["-a", "45.5", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Absolute Error vs Standard Library"));
}

#[test]
fn rust_log_raises_level_without_verbose() {
    trigcalc()
        .env("RUST_LOG", "debug")
        .args(["-a", "30", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn default_level_hides_debug() {
    trigcalc()
        .args(["-a", "30", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn verbose_mode() {
    trigcalc().args(["-a", "30", "-v"]).assert().success();
}

#[test]
fn reduce_improves_large_angles() {
    let plain = json_stdout(&["-a", "1080", "-t", "10", "--json"]);
    let reduced = json_stdout(&["-a", "1080", "-t", "10", "--reduce", "--json"]);
    let err = |v: &serde_json::Value| {
        (v["results"]["sin_taylor"].as_f64().unwrap() - v["results"]["sin_std"].as_f64().unwrap())
            .abs()
    };
    assert!(err(&reduced) < 1e-9);
    assert!(err(&plain) > err(&reduced));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    trigcalc()
        .args(["-a", "90", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn sweep_table() {
    trigcalc()
        .args(["--sweep", "0:90:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 rows, 4 lookup hits"));
}

#[test]
fn sweep_json() {
    let json = json_stdout(&["--sweep", "-10:10:0.5", "--json"]);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 41);
    assert_eq!(rows[0]["angle"], -10.0);
    assert_eq!(json["summary"]["lookup_hits"], 21);
}

#[test]
fn sweep_errors() {
    trigcalc().args(["--sweep", "10:0"]).assert().code(4);
    trigcalc().args(["--sweep", "0:10:0"]).assert().code(4);
    trigcalc().args(["--sweep", "nope"]).assert().code(4);
    trigcalc()
        .args(["--sweep", "0:10", "--module", "nonexistent"])
        .assert()
        .code(3);
}

#[test]
fn completion_bash() {
    trigcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trigcalc"));
}
