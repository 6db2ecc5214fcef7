//! Task launcher port definition.

use std::path::PathBuf;

use crate::domain::{AppError, TaskId};

/// Everything needed to run one resolved task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// The resolved task.
    pub task: TaskId,
    /// Absolute path of the task's source file.
    pub task_file: PathBuf,
    /// Trimmed input text handed to the task.
    pub input: String,
    /// Working directory for the task (the project root).
    pub working_dir: PathBuf,
}

/// Port for executing a resolved task.
pub trait TaskLauncher {
    /// Run the task to completion and return its exit code.
    fn launch(&self, request: &LaunchRequest) -> Result<i32, AppError>;
}
