use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// End-to-end tests driving the built binary. Paths that would invoke the
/// real Go toolchain are exercised with --dry-run or a stripped PATH.

const BUILTIN_NAMES: [&str; 6] = ["httpx", "katana", "naabu", "notify", "nuclei", "subfinder"];

fn reconkit() -> Command {
    Command::cargo_bin("reconkit").unwrap()
}

#[test]
fn list_shows_every_builtin_tool() {
    let assert = reconkit().arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for name in BUILTIN_NAMES {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn list_json_is_parseable() {
    let assert = reconkit().args(["list", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), BUILTIN_NAMES.len());
    assert_eq!(entries[0]["name"], "httpx");
}

#[test]
fn dry_run_honors_gobin_env_and_skips_toolchain() {
    let gobin = TempDir::new().unwrap();

    reconkit()
        .args(["install", "--dry-run"])
        .env("GOBIN", gobin.path())
        // Toolchain must never be invoked on a dry run
        .env("PATH", "")
        .assert()
        .success()
        .stdout(predicate::str::contains(gobin.path().to_str().unwrap()))
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("subfinder"));
}

#[test]
fn unknown_tool_filter_fails_before_installing() {
    let gobin = TempDir::new().unwrap();

    reconkit()
        .args(["install", "--tool", "nosuchtool", "--yes"])
        .args(["--gobin", gobin.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool: nosuchtool"));
}

#[test]
fn launch_failure_exits_zero_by_default() {
    let gobin = TempDir::new().unwrap();

    reconkit()
        .args(["install", "--yes", "--tool", "httpx"])
        .args(["--gobin", gobin.path().to_str().unwrap()])
        .env("PATH", "")
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to install httpx"))
        .stdout(predicate::str::contains("1 of 1 tools failed"));
}

#[test]
fn launch_failure_exits_nonzero_under_strict() {
    let gobin = TempDir::new().unwrap();

    reconkit()
        .args(["install", "--yes", "--strict", "--tool", "httpx"])
        .args(["--gobin", gobin.path().to_str().unwrap()])
        .env("PATH", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 1 tools failed to install"));
}

#[test]
fn status_json_reports_every_tool() {
    let gobin = TempDir::new().unwrap();
    std::fs::write(gobin.path().join("nuclei"), b"").unwrap();

    let assert = reconkit()
        .args(["status", "--format", "json"])
        .args(["--gobin", gobin.path().to_str().unwrap()])
        .env("PATH", "")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let report = report.as_array().unwrap();
    assert_eq!(report.len(), BUILTIN_NAMES.len());

    let nuclei = report.iter().find(|p| p["name"] == "nuclei").unwrap();
    assert_eq!(nuclei["installed"], true);
    let naabu = report.iter().find(|p| p["name"] == "naabu").unwrap();
    assert_eq!(naabu["installed"], false);
}
