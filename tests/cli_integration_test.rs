//! CLI integration tests
//!
//! Tests:
//! - paimon-action --help → exit 0
//! - paimon-action expire with text and json output
//! - validation failures exit non-zero and name the flag
//! - paimon-action expire --help prints the fixed usage text

use assert_cmd::Command;
use predicates::str::contains;

const EXPIRE_ARGS: [&str; 13] = [
    "expire",
    "--warehouse",
    "/wh",
    "--database",
    "db1",
    "--table",
    "t1",
    "--num-retained-min",
    "1",
    "--num-retained-max",
    "5",
    "--millis-retained",
    "86400000",
];

/// Get the binary command
fn paimon_action() -> Command {
    let mut cmd = Command::cargo_bin("paimon-action").unwrap();
    cmd.env_remove("PAIMON_ACTION_OUTPUT");
    cmd
}

#[test]
fn help_returns_exit_0() {
    let mut cmd = paimon_action();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn list_shows_expire() {
    let mut cmd = paimon_action();
    cmd.arg("list");
    cmd.assert().success().stdout(contains("expire"));
}

#[test]
fn expire_prints_request() {
    let mut cmd = paimon_action();
    cmd.args(EXPIRE_ARGS);
    cmd.assert()
        .success()
        .stdout(contains("db1.t1"))
        .stdout(contains("retain min 1, max 5, older than 86400000 ms"));
}

#[test]
fn expire_json_output() {
    let mut cmd = paimon_action();
    cmd.arg("--output").arg("json").args(EXPIRE_ARGS);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "expire");
    assert_eq!(json["warehouse"], "/wh");
    assert_eq!(json["retained_min"], 1);
    assert_eq!(json["retained_max"], 5);
    assert_eq!(json["retained_millis"], 86_400_000);
    assert_eq!(json["catalog_config"], serde_json::json!({}));
}

#[test]
fn output_format_from_env() {
    let mut cmd = paimon_action();
    cmd.env("PAIMON_ACTION_OUTPUT", "json")
        .args(EXPIRE_ARGS)
        .args(["--catalog-conf", "k1=v1,k2=v2"]);
    cmd.assert()
        .success()
        .stdout(contains(r#""k1": "v1""#))
        .stdout(contains(r#""k2": "v2""#));
}

#[test]
fn expire_missing_retention_flag_fails() {
    let mut cmd = paimon_action();
    cmd.args(&EXPIRE_ARGS[..11]);
    cmd.assert()
        .failure()
        .stderr(contains("missing required argument: --millis-retained"));
}

#[test]
fn expire_non_integer_fails() {
    let mut cmd = paimon_action();
    let mut args = EXPIRE_ARGS;
    args[8] = "abc";
    cmd.args(args);
    cmd.assert()
        .failure()
        .stderr(contains(r#"invalid value "abc" for --num-retained-min"#));
}

#[test]
fn expire_max_below_min_succeeds() {
    let mut cmd = paimon_action();
    let mut args = EXPIRE_ARGS;
    args[8] = "5";
    args[10] = "1";
    cmd.args(args);
    cmd.assert()
        .success()
        .stdout(contains("retain min 5, max 1"));
}

#[test]
fn expire_unknown_flag_fails() {
    let mut cmd = paimon_action();
    cmd.args(EXPIRE_ARGS).args(["--dry-run", "true"]);
    cmd.assert()
        .failure()
        .stderr(contains("unexpected argument '--dry-run'"));
}

#[test]
fn expire_accepts_equals_form() {
    let mut cmd = paimon_action();
    cmd.args([
        "expire",
        "--warehouse=/wh",
        "--database=db1",
        "--table=t1",
        "--num-retained-min=1",
        "--num-retained-max=5",
        "--millis-retained=86400000",
    ]);
    cmd.assert().success().stdout(contains("db1.t1"));
}

#[test]
fn expire_catalog_conf_value_with_commas() {
    let mut cmd = paimon_action();
    cmd.arg("--output")
        .arg("json")
        .args(EXPIRE_ARGS)
        .args(["--catalog-conf", "uri=thrift://a:9083,thrift://b:9083"]);
    cmd.assert()
        .success()
        .stdout(contains(r#""uri": "thrift://a:9083,thrift://b:9083""#));
}

#[test]
fn expire_help_prints_usage() {
    let mut cmd = paimon_action();
    cmd.args(["expire", "--help"]);
    cmd.assert().success().stdout(
        "Action \"expire\" keep at least one snapshot so that users will not accidentally clear all snapshots.\n\
         \n\
         Syntax:\n  \
         expire --warehouse <warehouse-path> --database <database-name> --table <table-name> \
         --num-retained-min <num-retained-min>--num-retained-max <num-retained-max> \
         --millis-retained <millis-retained>\n\
         \n",
    );
}

#[test]
fn expire_help_ignores_other_flags() {
    let mut cmd = paimon_action();
    cmd.args(["expire", "--table", "t1", "-h"]);
    cmd.assert()
        .success()
        .stdout(contains("Action \"expire\" keep at least one snapshot"));
}

#[test]
fn unknown_action_fails() {
    let mut cmd = paimon_action();
    cmd.args(["compact", "--table", "t1"]);
    cmd.assert()
        .failure()
        .stderr(contains("unsupported action \"compact\""))
        .stderr(contains("expire"));
}
