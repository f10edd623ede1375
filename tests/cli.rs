//! End-to-end tests for the `line-counter` binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("IGNORE.txt").write_str("*.md\n").unwrap();
    temp.child("code/a.go").write_str("1\n2\n3\n").unwrap();
    temp.child("code/b.go").write_str("1\n2\n3").unwrap();
    temp.child("code/README").write_str("hello\n").unwrap();
    temp.child("code/CHANGES.md").write_str("a\nb\nc\nd\n").unwrap();
    temp
}

fn line_counter(temp: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("line-counter").unwrap();
    cmd.current_dir(temp.path()).env_remove("LINE_COUNTER_IGNORE_FILE");
    cmd
}

#[test]
fn test_total_uses_ignore_file_in_working_directory() {
    let temp = project();

    line_counter(&temp)
        .arg("code")
        .assert()
        .success()
        .stdout("total 6\n");
}

#[test]
fn test_separate_breakdown_sorted_descending() {
    let temp = project();

    let expected = format!(
        "total 6\n{}\n{:<30} {:>10}\n{:<30} {:>10}\n",
        "-".repeat(41),
        ".go",
        5,
        "README",
        1
    );
    line_counter(&temp)
        .args(["-s", "code"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_json_output() {
    let temp = project();

    let output = line_counter(&temp)
        .args(["--json", "--separate", "code"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_lines"], 6);
    assert_eq!(value["counts"][".go"], 5);
    assert_eq!(value["counts"]["README"], 1);
    assert!(value.get("runtime").is_none());
}

#[test]
fn test_combined_short_flags_with_time() {
    let temp = project();

    line_counter(&temp)
        .args(["-jt", "code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"runtime\":"))
        .stdout(predicate::str::contains("\"counts\"").not());
}

#[test]
fn test_custom_ignore_file() {
    let temp = project();
    temp.child("only-go.txt").write_str("*.go\n").unwrap();

    line_counter(&temp)
        .args(["--ignore-file", "only-go.txt", "code"])
        .assert()
        .success()
        .stdout("total 5\n");
}

#[test]
fn test_missing_ignore_file_fails_without_output() {
    let temp = project();

    line_counter(&temp)
        .args(["--ignore-file", "absent.txt", "code"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_missing_directory_fails() {
    let temp = project();

    line_counter(&temp)
        .arg("no-such-dir")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn test_directory_argument_is_required() {
    let temp = project();

    line_counter(&temp).assert().failure();
}
