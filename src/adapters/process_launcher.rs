//! Runs a task file with the project's language runtime.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::domain::AppError;
use crate::ports::{LaunchRequest, TaskLauncher};

/// Launches `<command...> <task file>` with the input on stdin.
///
/// The child inherits stdout and stderr so task output reaches the terminal.
#[derive(Debug, Clone)]
pub struct ProcessTaskLauncher {
    command: Vec<String>,
}

impl ProcessTaskLauncher {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

impl TaskLauncher for ProcessTaskLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<i32, AppError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(AppError::LaunchError {
                command: String::new(),
                details: "runner command is empty".to_string(),
            });
        };

        let launch_error = |err: io::Error| AppError::LaunchError {
            command: self.display_command(),
            details: err.to_string(),
        };

        debug!("Launching {} {}", self.display_command(), request.task_file.display());
        let mut child = Command::new(program)
            .args(args)
            .arg(&request.task_file)
            .current_dir(&request.working_dir)
            .env("ADVENT_TASK", request.task.to_string())
            .stdin(Stdio::piped())
            .spawn()
            .map_err(launch_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A task that never reads its input closes the pipe early.
            match stdin.write_all(request.input.as_bytes()) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => return Err(launch_error(err)),
            }
        }

        let status = child.wait().map_err(launch_error)?;
        Ok(status.code().unwrap_or(1))
    }
}
