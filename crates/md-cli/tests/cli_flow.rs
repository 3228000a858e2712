//! End-to-end tests for the `md` binary.
//!
//! Each test gets its own ledger file via `MD_DATA_FILE` and an isolated
//! `HOME` so no user configuration leaks in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn md_binary() -> String {
    env!("CARGO_BIN_EXE_md").to_string()
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("mandays.test.json")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(md_binary());
        cmd.env("HOME", self.dir.path())
            .env("MD_DATA_FILE", self.data_file())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("XDG_DATA_HOME")
            .env_remove("RUST_LOG")
            .args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to run md")
    }

    /// Runs `md` and asserts success, returning stdout.
    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "md {args:?} should succeed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn ledger(&self) -> Option<Value> {
        read_json(&self.data_file())
    }
}

fn read_json(path: &Path) -> Option<Value> {
    let raw = std::fs::read_to_string(path).ok()?;
    Some(serde_json::from_str(&raw).unwrap())
}

#[test]
fn test_add_time_to_default_task() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.ok(&["2:30"]);
    assert!(stdout.contains("Added 2:30"));
    assert!(stdout.contains("default"));
    assert!(stdout.contains("0.313 MD"));

    let data = sandbox.ledger().unwrap();
    assert_eq!(data["tasks"]["default"], 150);
    assert_eq!(data["activeTask"], "default");
}

#[test]
fn test_accumulates_on_same_task() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["1:00"]);
    sandbox.ok(&["2:00"]);

    assert_eq!(sandbox.ledger().unwrap()["tasks"]["default"], 180);
}

#[test]
fn test_invalid_time_fails_without_writing() {
    let sandbox = Sandbox::new();

    for args in [&["invalid"][..], &["2:75"], &["unknown-command"]] {
        let output = sandbox.run(args);
        assert_eq!(output.status.code(), Some(1), "md {args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
    }
    assert!(sandbox.ledger().is_none());
}

#[test]
fn test_tracks_multiple_tasks_independently() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["2:00"]);
    sandbox.ok(&["switch", "PROJ-A"]);
    sandbox.ok(&["3:00"]);
    sandbox.ok(&["switch", "PROJ-B"]);
    sandbox.ok(&["1:30"]);

    let data = sandbox.ledger().unwrap();
    assert_eq!(data["tasks"]["default"], 120);
    assert_eq!(data["tasks"]["PROJ-A"], 180);
    assert_eq!(data["tasks"]["PROJ-B"], 90);
    assert_eq!(data["activeTask"], "PROJ-B");
}

#[test]
fn test_switch_to_new_task_records_nothing() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["2:00"]);

    let stdout = sandbox.ok(&["switch", "PROJ-123"]);
    assert!(stdout.contains("Switched to new task"));

    let data = sandbox.ledger().unwrap();
    assert_eq!(data["activeTask"], "PROJ-123");
    assert!(data["tasks"].get("PROJ-123").is_none());
}

#[test]
fn test_ledger_file_keeps_insertion_order() {
    let sandbox = Sandbox::new();
    for task in ["C", "A", "B"] {
        sandbox.ok(&["switch", task]);
        sandbox.ok(&["1:00"]);
    }

    let raw = std::fs::read_to_string(sandbox.data_file()).unwrap();
    let c = raw.find("\"C\"").unwrap();
    let a = raw.find("\"A\"").unwrap();
    let b = raw.find("\"B\"").unwrap();
    assert!(c < a && a < b, "unexpected order in {raw}");
}

#[test]
fn test_summary_empty_and_populated() {
    let sandbox = Sandbox::new();
    assert!(sandbox.ok(&[]).contains("No tasks recorded"));

    sandbox.ok(&["2:00"]);
    sandbox.ok(&["switch", "PROJ-Y"]);
    sandbox.ok(&["3:00"]);

    let stdout = sandbox.ok(&[]);
    assert!(stdout.contains("TASK OVERVIEW"));
    assert!(stdout.contains("PROJ-Y <- ACTIVE"));
    assert!(stdout.contains("TOTAL"));
    assert!(stdout.contains("5:00"));
}

#[test]
fn test_delete_and_aliases() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["2:00"]);

    for alias in ["delete", "del", "rm"] {
        sandbox.ok(&["switch", "TEMP"]);
        sandbox.ok(&["1:00"]);
        let stdout = sandbox.ok(&[alias, "TEMP"]);
        assert!(stdout.contains("deleted"), "alias {alias}");

        let data = sandbox.ledger().unwrap();
        assert!(data["tasks"].get("TEMP").is_none());
        assert_eq!(data["activeTask"], "default");
    }
}

#[test]
fn test_delete_missing_task_is_not_an_error() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.ok(&["delete", "NONEXISTENT"]);
    assert!(stdout.contains("does not exist"));
    assert!(sandbox.ledger().is_none());
}

#[test]
fn test_delete_zero_minute_task() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["switch", "ZERO-TASK"]);
    sandbox.ok(&["0:00"]);

    assert!(sandbox.ok(&["delete", "ZERO-TASK"]).contains("deleted"));
}

#[test]
fn test_reset_single_and_all() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["3:00"]);
    sandbox.ok(&["reset", "default"]);
    assert_eq!(sandbox.ledger().unwrap()["tasks"]["default"], 0);

    sandbox.ok(&["switch", "PROJ-1"]);
    sandbox.ok(&["3:00"]);
    sandbox.ok(&["reset"]);

    let data = sandbox.ledger().unwrap();
    assert_eq!(data["tasks"], serde_json::json!({}));
    assert_eq!(data["activeTask"], "default");

    assert!(sandbox.ok(&["reset", "ghost"]).contains("does not exist"));
}

#[test]
fn test_calc_does_not_save() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.ok(&["c", "2:30"]);
    assert!(stdout.contains("2.50 hours"));
    assert!(stdout.contains("0.313 MD"));

    assert!(sandbox.ok(&["calc", "3:00"]).contains("0.375 MD"));
    assert!(sandbox.ok(&["calculate", "1:30"]).contains("1:30"));
    assert!(sandbox.ledger().is_none());
}

#[test]
fn test_help_variants() {
    let sandbox = Sandbox::new();
    for flag in ["help", "--help", "-h"] {
        let stdout = sandbox.ok(&[flag]);
        assert!(stdout.contains("Usage:"), "md {flag}");
    }
    assert!(sandbox.ok(&["--help"]).contains("Examples:"));
}

#[test]
fn test_corrupt_ledger_fails() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.data_file(), "{ not json").unwrap();

    let output = sandbox.run(&["2:00"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load ledger"));
}

#[test]
fn test_config_file_sets_data_file() {
    let sandbox = Sandbox::new();
    let ledger_path = sandbox.dir.path().join("from-config.json");
    let config_path = sandbox.dir.path().join("md.toml");
    std::fs::write(
        &config_path,
        format!("data_file = {:?}\n", ledger_path.display().to_string()),
    )
    .unwrap();

    let output = Command::new(md_binary())
        .env("HOME", sandbox.dir.path())
        .env_remove("MD_DATA_FILE")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .arg("--config")
        .arg(&config_path)
        .arg("1:15")
        .output()
        .unwrap();
    assert!(output.status.success());

    let data = read_json(&ledger_path).unwrap();
    assert_eq!(data["tasks"]["default"], 75);
}
