//! Integration tests for the SetEnv CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`, each in
//! its own temporary project directory.

use std::fs;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the setenv binary, run inside `dir`.
fn setenv(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("setenv").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("SETENV_STATE_FILE")
        .env_remove("SETENV_ENV_FILE")
        .env_remove("SETENV_LOG");
    cmd
}

fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).expect("file should exist")
}

fn state(dir: &TempDir) -> serde_json::Value {
    serde_json::from_str(&read(dir, "env.json")).expect("valid state json")
}

// ---------------------------------------------------------------------------
// Help and version
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--addvar"))
        .stdout(predicate::str::contains("Examples"));

    tmp.child("env.json").assert(predicate::path::missing());
    tmp.child(".env").assert(predicate::path::missing());
}

#[test]
fn legacy_help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stagekey"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("setenv"));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn first_run_creates_state_and_env_file() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=DB_USER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No env.json file has been found"))
        .stdout(predicate::str::contains(".env has been updated!"))
        .stdout(predicate::str::contains(r#"DB_USER="op://v/i/DB_USER""#));

    assert_eq!(read(&tmp, ".env"), r#"DB_USER="op://v/i/DB_USER""#);
    let json = state(&tmp);
    assert_eq!(json["vault"], "v");
    assert_eq!(json["vars"]["DB_USER"], "DB_USER");
}

#[test]
fn stage_is_rendered_but_not_persisted() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args([
            "-vault=v",
            "-item=i",
            "-addvar=A",
            "-stagekey=vault",
            "-stage=prod",
        ])
        .assert()
        .success();

    assert_eq!(read(&tmp, ".env"), r#"A="op://v-prod/i/A""#);
    let json = state(&tmp);
    assert_eq!(json["vault"], "v");
    assert_eq!(json["stage"], "prod");
    assert_eq!(json["stage_key"], "vault");

    // A second run starts from the unsuffixed state again.
    setenv(&tmp).arg("-tfvars").assert().success();
    assert_eq!(read(&tmp, ".env"), r#"TF_VAR_A="op://v-prod/i/A""#);
}

#[test]
fn tfvars_is_not_remembered() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["--vault", "v", "--item", "i", "--addvar", "A", "--tfvars"])
        .assert()
        .success();
    assert_eq!(read(&tmp, ".env"), r#"TF_VAR_A="op://v/i/A""#);
    assert!(state(&tmp).get("tfvars").is_none());

    setenv(&tmp).arg("--addvar=B").assert().success();
    assert_eq!(
        read(&tmp, ".env"),
        "A=\"op://v/i/A\"\nB=\"op://v/i/B\""
    );
}

#[test]
fn aws_stage_writes_sentinel() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args([
            "-vault=v",
            "-item=i",
            "-addvar=DB_PASSWORD:password",
            "-stagekey=item",
            "-stage=aws",
        ])
        .assert()
        .success();

    assert_eq!(
        read(&tmp, ".env"),
        r#"DB_PASSWORD="op://v/i-$AWS_ENV/password""#
    );
    assert_eq!(state(&tmp)["stage"], "$AWS_ENV");
}

#[test]
fn vault_and_item_are_trimmed_in_output_only() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault= my vault ", "-item=project ", "-addvar=A"])
        .assert()
        .success();

    assert_eq!(read(&tmp, ".env"), r#"A="op://my vault/project/A""#);
    assert_eq!(state(&tmp)["vault"], " my vault ");
}

#[test]
fn invalid_stage_warns_and_run_continues() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-stage=test", "-addvar=A"])
        .assert()
        .success();

    setenv(&tmp)
        .args(["-stage=dev", "-stagekey=nope", "-addvar=B"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "allowed options are: test, staging, prod",
        ))
        .stderr(predicate::str::contains(
            "allowed options are: vault, item, vars",
        ));

    let json = state(&tmp);
    assert_eq!(json["stage"], "test");
    assert_eq!(json["stage_key"], "");
    assert_eq!(json["vars"]["B"], "B");
}

#[test]
fn rmvar_removes_listed_vars() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=A,B,C"])
        .assert()
        .success();

    setenv(&tmp)
        .args(["-rmvar=A, C,MISSING"])
        .assert()
        .success();

    assert_eq!(read(&tmp, ".env"), r#"B="op://v/i/B""#);
}

#[test]
fn env_file_is_rewritten_not_appended() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".env").write_str("STALE=1\n").unwrap();

    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=A"])
        .assert()
        .success();

    assert!(!read(&tmp, ".env").contains("STALE"));
}

#[test]
fn malformed_state_file_fails() {
    let tmp = TempDir::new().unwrap();
    tmp.child("env.json").write_str("{ not json").unwrap();

    setenv(&tmp)
        .arg("-addvar=A")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse state file"));

    tmp.child(".env").assert(predicate::path::missing());
}

#[test]
fn settings_file_renames_project_files() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".setenv.toml")
        .write_str("state_file = \"setenv.json\"\nenv_file = \".env.tf\"\n")
        .unwrap();

    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".env.tf has been updated!"));

    tmp.child("setenv.json").assert(predicate::path::exists());
    tmp.child(".env.tf").assert(r#"A="op://v/i/A""#);
    tmp.child("env.json").assert(predicate::path::missing());
}

#[test]
fn state_file_flag_overrides_settings() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".setenv.toml")
        .write_str("state_file = \"setenv.json\"\n")
        .unwrap();

    setenv(&tmp)
        .args(["--state-file=custom.json", "-addvar=A"])
        .assert()
        .success();

    tmp.child("custom.json").assert(predicate::path::exists());
    tmp.child("setenv.json").assert(predicate::path::missing());
}

#[test]
fn malformed_settings_file_fails() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".setenv.toml").write_str("not valid {{toml").unwrap();

    setenv(&tmp)
        .arg("-addvar=A")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}

#[test]
fn unknown_stored_stage_names_recovery_flag() {
    let tmp = TempDir::new().unwrap();
    tmp.child("env.json")
        .write_str(r#"{"vault":"v","item":"i","vars":{"A":"A"},"stage":"dev"}"#)
        .unwrap();

    setenv(&tmp)
        .arg("-addvar=B")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown stage 'dev'"))
        .stderr(predicate::str::contains("-stage=<value>"));

    tmp.child(".env").assert(predicate::path::missing());
}

#[test]
fn stage_flag_replaces_unknown_stored_stage() {
    let tmp = TempDir::new().unwrap();
    tmp.child("env.json")
        .write_str(r#"{"vault":"v","item":"i","vars":{"A":"A"},"stage":"dev"}"#)
        .unwrap();

    setenv(&tmp)
        .arg("-stage=prod")
        .assert()
        .success()
        .stderr(predicate::str::contains("Replacing unknown stage 'dev'"));

    let saved = state(&tmp);
    assert_eq!(saved["stage"], "prod");
    assert_eq!(saved["vault"], "v");
    assert_eq!(saved["vars"]["A"], "A");
}

// ---------------------------------------------------------------------------
// Side-band actions
// ---------------------------------------------------------------------------

#[test]
fn view_shows_project_and_env() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args([
            "-vault=v",
            "-item=i",
            "-addvar=DB_USER",
            "-stagekey=item",
            "-stage=staging",
        ])
        .assert()
        .success();

    setenv(&tmp)
        .arg("-view")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Project Information"))
        .stdout(predicate::str::contains("staging"))
        .stdout(predicate::str::contains("DB_USER"))
        .stdout(predicate::str::contains(r#"DB_USER="op://v/i-staging/DB_USER""#));
}

#[test]
fn view_does_not_apply_other_flags() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=A"])
        .assert()
        .success();

    setenv(&tmp)
        .args(["-view", "-addvar=B"])
        .assert()
        .success();

    assert!(state(&tmp)["vars"].get("B").is_none());
}

#[test]
fn view_without_project_reports_it() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .arg("-view")
        .assert()
        .success()
        .stdout(predicate::str::contains("No env.json file has been found"));
}

#[test]
fn ignore_adds_both_files_once() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".gitignore").write_str("target/").unwrap();

    setenv(&tmp)
        .arg("-ignore")
        .assert()
        .success()
        .stdout(predicate::str::contains("'.env' has been added to .gitignore"))
        .stdout(predicate::str::contains("'env.json' has been added to .gitignore"));

    setenv(&tmp)
        .arg("-ignore")
        .assert()
        .success()
        .stdout(predicate::str::contains("'.env' is already in .gitignore"));

    tmp.child(".gitignore").assert("target/\n.env\nenv.json\n");
}

#[test]
fn clean_deletes_project_files() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["-vault=v", "-item=i", "-addvar=A"])
        .assert()
        .success();

    setenv(&tmp)
        .arg("-clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("env.json has been successfully deleted"));

    tmp.child("env.json").assert(predicate::path::missing());
    tmp.child(".env").assert(predicate::path::missing());
}

#[test]
fn clean_without_files_still_succeeds() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .arg("-clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error removing '.env'"));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_flag_shows_debug_logs() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .args(["--verbose", "-addvar=A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loading state file"));
}

#[test]
fn default_run_has_no_debug_logs() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .arg("-addvar=A")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn log_env_var_enables_debug_logs() {
    let tmp = TempDir::new().unwrap();
    setenv(&tmp)
        .env("SETENV_LOG", "setenv=debug")
        .arg("-addvar=A")
        .assert()
        .success()
        .stderr(predicate::str::contains("saving state file"));
}
