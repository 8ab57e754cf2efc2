use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn bikeshare() -> Command {
    Command::cargo_bin("bikeshare").unwrap()
}

#[test]
fn test_main_help() {
    bikeshare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore US bike-share trip data interactively"))
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version() {
    bikeshare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bikeshare "));
}

#[test]
fn test_unknown_flag_is_rejected() {
    bikeshare()
        .arg("--city")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--city"));
}

#[test]
fn test_empty_stdin_exits_cleanly() {
    let data_dir = tempfile::TempDir::new().unwrap();
    bikeshare()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(predicate::str::contains("Which city would you like to see data for"));
}
