//! Shared testing utilities for advent CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template trees shipped with the crate.
#[allow(dead_code)]
pub const TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `advent` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `advent` binary within a custom directory.
    ///
    /// Session, template and package manager hints from the outer environment are removed.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("advent").expect("Failed to locate advent binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.root.path())
            .env_remove("AOC_SESSION")
            .env_remove("ADVENT_TEMPLATES")
            .env_remove("npm_config_user_agent")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a minimal project with `advent.toml` and empty task and input directories.
    ///
    /// `runner` overrides the launcher command when given.
    pub fn write_project(&self, runner: Option<&[&str]>) -> PathBuf {
        let root = self.work_dir.clone();
        let mut config = String::from(
            "[project]\nname = \"advent-of-code-2023\"\nyear = 2023\nlanguage = \"typescript\"\nruntime = \"node\"\n",
        );
        if let Some(command) = runner {
            let quoted: Vec<String> = command.iter().map(|part| format!("\"{}\"", part)).collect();
            config.push_str(&format!("\n[runner]\ncommand = [{}]\n", quoted.join(", ")));
        }
        fs::write(root.join("advent.toml"), config).expect("Failed to write advent.toml");
        fs::create_dir_all(root.join("tasks")).expect("Failed to create tasks directory");
        fs::create_dir_all(root.join("inputs")).expect("Failed to create inputs directory");
        root
    }

    /// Write a task file under `tasks/`.
    pub fn write_task(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join("tasks").join(name), content).expect("Failed to write task");
    }

    /// Write an input file under `inputs/`.
    pub fn write_input(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join("inputs").join(name), content)
            .expect("Failed to write input");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}
