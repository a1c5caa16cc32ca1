// Contract tests for the `config` command contributed by the bundled plugin
//
// Feature: Plugin-registered top-level command
//   As a cmdhost user
//   I want `cmdhost config <verb>` to run the plugin's operations
//   So that plugins can extend the host without touching its parser

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// cmdhost with settings pointed at an empty temp dir, so a user's real
/// config file never leaks into the run.
fn cmdhost(settings_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmdhost"));
    cmd.env("CMDHOST_CONFIG", settings_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn bdd_config_foo_prints_fixed_line() -> std::io::Result<()> {
    // Scenario: When I run "cmdhost config foo"
    //   Then stdout is exactly "do foo now"
    //   And exit code should be 0
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["config", "foo"])
        .assert()
        .success()
        .stdout("do foo now\n");
    Ok(())
}

#[test]
fn bdd_config_bar_prints_fixed_line() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["config", "bar"])
        .assert()
        .success()
        .stdout("do bar now\n");
    Ok(())
}

#[test]
fn bdd_config_help_renders_title_and_description() -> std::io::Result<()> {
    // Scenario: When I run "cmdhost config help"
    //   Then the title is "config"
    //   And the body contains the documentation string
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["config", "help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("config\n======\n"))
        .stdout(predicate::str::contains("Description"))
        .stdout(predicate::str::contains("Edit the cmdhost config file"));
    Ok(())
}

#[test]
fn bdd_config_without_verb_shows_help() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit the cmdhost config file"));
    Ok(())
}

#[test]
fn bdd_config_unknown_verb_is_usage_error() -> std::io::Result<()> {
    // Scenario: When I run "cmdhost config baz"
    //   Then exit code should be 2
    //   And no operation output is written
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["config", "baz"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("baz"));
    Ok(())
}

#[test]
fn bdd_global_flags_precede_command() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["--profile", "dev", "config", "foo"])
        .assert()
        .success()
        .stdout("do foo now\n");
    Ok(())
}

#[test]
fn bdd_debug_logs_go_to_stderr_only() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    cmdhost(&dir)
        .args(["--debug", "config", "bar"])
        .assert()
        .success()
        .stdout("do bar now\n")
        .stderr(predicate::str::contains("Dispatching command"));
    Ok(())
}
