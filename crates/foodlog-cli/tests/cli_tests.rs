use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn foodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("foodlog").expect("Failed to find foodlog binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_format_serving_with_unit_count() {
    foodlog_cmd()
        .args(["format-serving", "60", "slice", "--weight", "30"])
        .assert()
        .success()
        .stdout("60g (2 slices)\n");
}

#[test]
fn test_cli_format_serving_single_unit() {
    foodlog_cmd()
        .args(["format-serving", "12", "cookie", "-w", "12"])
        .assert()
        .success()
        .stdout("12g (1 cookie)\n");
}

#[test]
fn test_cli_format_serving_defaults_to_grams() {
    foodlog_cmd()
        .args(["fs", "250"])
        .assert()
        .success()
        .stdout("250g\n");
}

#[test]
fn test_cli_format_serving_rejects_non_numeric_quantity() {
    foodlog_cmd()
        .args(["format-serving", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_rejects_unsupported_base_url() {
    foodlog_cmd()
        .args(["--base-url", "ftp://food.example", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize food service"));
}

#[test]
fn test_cli_base_url_from_environment() {
    foodlog_cmd()
        .env("FOODLOG_BASE_URL", "food.example")
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize food service"));
}

#[test]
fn test_cli_help_lists_commands() {
    foodlog_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("format-serving"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--session-cookie"));
}
