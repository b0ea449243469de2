//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keyboard-catalog binary
pub fn catalog_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keyboard-catalog")
}

/// Creates `<root>/static/config/<keyboard>/<file>` for every entry.
///
/// Returns the temp project root; config files contain `{}`.
pub fn create_project(keyboards: &[(&str, &[&str])]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = config_dir(temp_dir.path());
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");

    for (keyboard, files) in keyboards {
        add_keyboard(&config_dir, keyboard, files);
    }

    temp_dir
}

/// Adds one keyboard directory with the given files.
pub fn add_keyboard(config_dir: &Path, keyboard: &str, files: &[&str]) {
    let dir = config_dir.join(keyboard);
    fs::create_dir_all(&dir).expect("Failed to create keyboard dir");
    for file in files {
        fs::write(dir.join(file), "{}").expect("Failed to write config file");
    }
}

/// Default config tree location inside a project root.
pub fn config_dir(project: &Path) -> PathBuf {
    project.join("static").join("config")
}

/// Default manifest location inside a project root.
pub fn manifest_path(project: &Path) -> PathBuf {
    project.join("src").join("keyboards.js")
}

/// A project with one complete keyboard of each kind plus one with a missing file.
pub fn mixed_project() -> TempDir {
    create_project(&[
        ("kbd1", &["kbd1_config.json"]),
        (
            "kbd2",
            &[
                "kbd2_ansi_master_left_config.json",
                "kbd2_ansi_slave_right_config.json",
            ],
        ),
        ("kbd3", &["kbd3_iso_master_left_config.json"]),
    ])
}

/// Runs the binary with `project` as working directory.
///
/// The user config directory is pointed into the project so a developer's
/// own config never leaks into tests.
pub fn run_in(project: &Path, args: &[&str]) -> Output {
    Command::new(catalog_bin())
        .args(args)
        .current_dir(project)
        .env("XDG_CONFIG_HOME", project.join(".xdg"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a finished command as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
