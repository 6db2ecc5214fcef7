//! `run`: resolve a selector to a task and its input, then launch it.

use std::path::{Path, PathBuf};

use log::info;

use crate::domain::{
    AppError, InputSource, ProjectConfig, ResolvedInput, Selection, TaskId, resolve, resolve_input,
    scan_task_files,
};
use crate::ports::{LaunchRequest, TaskLauncher};

/// A resolved task together with the input it will receive.
#[derive(Debug, Clone)]
pub struct SelectedTask {
    pub task: TaskId,
    pub task_file: PathBuf,
    pub input: ResolvedInput,
}

/// Result of running a task.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub task: TaskId,
    pub input_source: InputSource,
    pub exit_code: i32,
}

/// Resolve `selector` and the matching input without running anything.
///
/// The task directory is scanned afresh on every call.
pub fn select(
    project_root: &Path,
    config: &ProjectConfig,
    selector: &str,
    use_example: bool,
) -> Result<SelectedTask, AppError> {
    let selection = Selection::parse(selector)?;
    let language = config.project.language;
    let tasks_dir = config.tasks_dir(project_root);

    let files = scan_task_files(&tasks_dir, language)?;
    let catalog: Vec<TaskId> = files.iter().map(|file| file.task).collect();
    let task = resolve(&selection, &catalog)?;
    let task_file = files
        .into_iter()
        .find(|file| file.task == task)
        .map(|file| file.path)
        .ok_or_else(|| AppError::TaskNotFound(task.to_string()))?;
    let input = resolve_input(&config.inputs_dir(project_root), task.day, use_example)?;

    Ok(SelectedTask { task, task_file, input })
}

/// Execute the run command.
pub fn execute<L: TaskLauncher>(
    project_root: &Path,
    config: &ProjectConfig,
    selector: &str,
    use_example: bool,
    launcher: &L,
) -> Result<RunOutcome, AppError> {
    let selected = select(project_root, config, selector, use_example)?;
    info!("Running task {} with {}", selected.task, selected.input.source.file_name());

    let request = LaunchRequest {
        task: selected.task,
        task_file: selected.task_file,
        input: selected.input.content.trim().to_string(),
        working_dir: project_root.to_path_buf(),
    };
    let exit_code = launcher.launch(&request)?;

    Ok(RunOutcome { task: selected.task, input_source: selected.input.source, exit_code })
}
