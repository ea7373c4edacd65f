//! End-to-end tests driving the pomo binary over stdin.
//!
//! Zero-length intervals keep the countdowns instant, and a config path
//! inside a fresh temp dir keeps the user's real config out of the run.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.arg("--config")
        .arg(temp.path().join("config.yaml"))
        .args(["--focus", "0s", "--break", "0s"]);
    cmd
}

#[test]
fn two_sessions_run_two_focus_break_pairs() {
    let temp = TempDir::new().unwrap();

    let assert = pomo(&temp)
        .args(["--sessions", "2"])
        // One "0" for the up-front manager visit, one per cycle.
        .write_stdin("0\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for using pomo!"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Pomodoro started. Focus!").count(), 2);
    assert_eq!(stdout.matches("Short break. Relax!").count(), 2);
    // Up-front visit plus one per cycle.
    assert_eq!(stdout.matches("What would you like to do?").count(), 3);
}

#[test]
fn session_count_is_prompted_when_flag_is_absent() {
    let temp = TempDir::new().unwrap();

    let assert = pomo(&temp)
        .write_stdin("0\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter the number of Pomodoro sessions to run:",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Pomodoro started. Focus!").count(), 1);
}

#[test]
fn add_and_complete_flow_shows_up_in_the_summary() {
    let temp = TempDir::new().unwrap();

    let stdin = "1\nWrite report\n1\nReview PR\n2\nWrite report\n0\n";
    let assert = pomo(&temp)
        .args(["--sessions", "0"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"))
        .stdout(predicate::str::contains("Thank you for using pomo!"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // Zero sessions: no timer output at all.
    assert_eq!(stdout.matches("Pomodoro started. Focus!").count(), 0);

    // Summary: "Review PR" still active, "Write report" completed.
    let tasks_at = stdout.find("Tasks:").unwrap();
    let completed_at = stdout.rfind("Completed tasks:").unwrap();
    assert!(stdout[tasks_at..completed_at].contains("- Review PR"));
    assert!(stdout[completed_at..].contains("- Write report"));
}

#[test]
fn invalid_menu_choices_reprompt_without_crashing() {
    let temp = TempDir::new().unwrap();

    pomo(&temp)
        .args(["--sessions", "0"])
        .write_stdin("9\nnope\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"));
}

#[test]
fn eof_everywhere_still_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    pomo(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for using pomo!"));
}

#[test]
fn invalid_duration_flag_fails_with_an_error() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.arg("--config")
        .arg(temp.path().join("config.yaml"))
        .args(["--focus", "soon", "--sessions", "0"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn config_file_sets_the_default_durations() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yaml");
    std::fs::write(&config_path, "focus:\n  focus_minutes: 0\n  break_minutes: 0\n").unwrap();

    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["--sessions", "1"])
        .write_stdin("0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time's up!"));
}
