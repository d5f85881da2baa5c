// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the repolist CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Lay out `repos/` with two repositories and one plain directory, plus a
/// config file pointing at it
fn setup_tree() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    gix::init(dir.path().join("repos/alpha")).unwrap();
    gix::init(dir.path().join("repos/beta")).unwrap();
    fs::create_dir_all(dir.path().join("repos/broken")).unwrap();

    let config = dir.path().join("repolist.toml");
    fs::write(&config, "git_dirs = [\"repos/*\"]\n").unwrap();
    (dir, config)
}

/// Run repolist against a config file with a clean environment
fn repolist(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("repolist").expect("Failed to find repolist binary");
    cmd.env_remove("REPOLIST_GIT_DIRS")
        .env_remove("REPOLIST_ROOT")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_list_shows_repositories_only() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 repositories"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("broken").not())
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_list_json() {
    let (_dir, config) = setup_tree();

    let output = repolist(&config).args(["--json", "list"]).output().unwrap();
    assert!(output.status.success());

    let repos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let params: Vec<&str> = repos
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["param"].as_str().unwrap())
        .collect();
    assert_eq!(params, vec!["alpha", "beta"]);
    assert_eq!(repos[0]["group"], "repos");
}

#[test]
fn test_groups_json_is_keyed_by_group() {
    let (_dir, config) = setup_tree();

    let output = repolist(&config).args(["--json", "groups"]).output().unwrap();
    assert!(output.status.success());

    let grouped: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grouped["repos"].as_array().unwrap().len(), 2);
}

#[test]
fn test_find_existing() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .args(["find", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("group: repos"));
}

#[test]
fn test_find_missing_exits_with_not_found() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .args(["find", "gamma"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such repository: gamma"));
}

#[test]
fn test_find_shows_description() {
    let (dir, config) = setup_tree();
    let repository = gix::open(dir.path().join("repos/beta")).unwrap();
    fs::write(repository.git_dir().join("description"), "Second project\n").unwrap();

    repolist(&config)
        .args(["find", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second project"));

    repolist(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("Second project"));
}

#[test]
fn test_existing_relative_directory_beats_config_root() {
    let cwd = TempDir::new().unwrap();
    gix::init(cwd.path().join("repos/incwd")).unwrap();

    let (_root, config) = {
        let root = TempDir::new().unwrap();
        gix::init(root.path().join("repos/inroot")).unwrap();
        let config = root.path().join("repolist.toml");
        fs::write(&config, "git_dirs = [\"repos/*\"]\n").unwrap();
        (root, config)
    };

    repolist(&config)
        .current_dir(cwd.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("incwd"))
        .stdout(predicate::str::contains("inroot").not());
}

#[test]
fn test_pattern_falls_back_to_config_root() {
    let cwd = TempDir::new().unwrap();
    let (_dir, config) = setup_tree();

    repolist(&config)
        .current_dir(cwd.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn test_unknown_log_level_keeps_warnings() {
    let (dir, config) = setup_tree();
    fs::write(&config, "git_dirs = [\"repos/*\"]\nlog_level = \"loud\"\n").unwrap();

    repolist(&config)
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown log level 'loud'"))
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_verbose_names_config_file() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration read from"))
        .stderr(predicate::str::contains("repolist.toml"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    repolist(&dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_config_prints_globs() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("git_dirs"))
        .stdout(predicate::str::contains("repos/*"));
}

#[test]
fn test_completions() {
    let (_dir, config) = setup_tree();

    repolist(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repolist"));
}
