//! Project configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Language, Runtime};

/// Configuration of a generated project, loaded from `advent.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub puzzle_input: PuzzleInputConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl ProjectConfig {
    pub fn new(project: ProjectSection) -> Self {
        Self {
            project,
            paths: PathsConfig::default(),
            puzzle_input: PuzzleInputConfig::default(),
            runner: RunnerConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.project.validate()?;
        self.paths.validate()?;
        self.puzzle_input.validate()?;
        self.runner.validate()?;
        Ok(())
    }

    pub fn tasks_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.paths.tasks)
    }

    pub fn inputs_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.paths.inputs)
    }

    /// Command prefix used to execute a task file.
    pub fn runner_command(&self) -> Vec<String> {
        match &self.runner.command {
            Some(command) => command.clone(),
            None => self.project.language.runner(self.project.runtime),
        }
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::InvalidConfig(e.to_string()))
    }
}

/// Identity of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Package name; also used to infer the puzzle year when `year` is unset.
    pub name: String,
    /// Puzzle year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub runtime: Runtime,
}

impl ProjectSection {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidConfig("project.name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Task and input directories, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_tasks_dir")]
    pub tasks: PathBuf,
    #[serde(default = "default_inputs_dir")]
    pub inputs: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { tasks: default_tasks_dir(), inputs: default_inputs_dir() }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tasks.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("paths.tasks must not be empty".to_string()));
        }
        if self.inputs.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("paths.inputs must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_tasks_dir() -> PathBuf {
    PathBuf::from("tasks")
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from("inputs")
}

/// Remote puzzle input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleInputConfig {
    /// Puzzle site root.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for PuzzleInputConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl PuzzleInputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "puzzle_input.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "puzzle_input.base_url is not a base URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://adventofcode.com").expect("Default puzzle URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Optional override of the task runner command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(command) = &self.command
            && command.first().is_none_or(|program| program.trim().is_empty())
        {
            return Err(AppError::InvalidConfig("runner.command must name a program".to_string()));
        }
        Ok(())
    }
}
