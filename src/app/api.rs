//! API Facade for the application.
//!
//! Each operation has a `*_at` form taking the project root explicitly and a
//! short form that uses the current directory.

use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::adapters::{HttpPuzzleInputClient, ProcessTaskLauncher};
use crate::app::commands::{make_day, new_project, run_task};
use crate::app::config::resolve_session;
use crate::domain::{AppError, Day, TaskId, list_tasks, load_config};

pub use crate::app::commands::make_day::{InputOutcome, MakeDayOutcome};
pub use crate::app::commands::new_project::{NewProjectOptions, NewProjectOutcome};
pub use crate::app::commands::run_task::{RunOutcome, SelectedTask};

/// Year used when nothing else names one.
pub fn current_year() -> u16 {
    u16::try_from(chrono::Local::now().year()).unwrap_or(u16::MAX)
}

/// Create a new project from the language template.
pub fn new_project(options: &NewProjectOptions) -> Result<NewProjectOutcome, AppError> {
    new_project::execute(options)
}

/// Create task and input files for a day in the current directory.
pub fn make_day(day: Day) -> Result<MakeDayOutcome, AppError> {
    make_day_at(std::env::current_dir()?, day)
}

/// Create task and input files for a day in the specified project.
///
/// Input is fetched only when a session cookie is available.
pub fn make_day_at(project_root: impl Into<PathBuf>, day: Day) -> Result<MakeDayOutcome, AppError> {
    let project_root = project_root.into();
    let config = load_config(&project_root)?;

    let client = match resolve_session(&project_root) {
        Some(session) => Some(HttpPuzzleInputClient::new(session, &config.puzzle_input)?),
        None => None,
    };

    make_day::execute(&project_root, &config, day, client.as_ref(), current_year())
}

/// Resolve and run a task in the current directory.
pub fn run(selector: &str, use_example: bool) -> Result<RunOutcome, AppError> {
    run_at(std::env::current_dir()?, selector, use_example)
}

/// Resolve and run a task in the specified project.
pub fn run_at(
    project_root: impl Into<PathBuf>,
    selector: &str,
    use_example: bool,
) -> Result<RunOutcome, AppError> {
    let project_root = project_root.into();
    let config = load_config(&project_root)?;
    let launcher = ProcessTaskLauncher::new(config.runner_command());
    run_task::execute(&project_root, &config, selector, use_example, &launcher)
}

/// Resolve a task and its input without running it.
pub fn select_at(
    project_root: &Path,
    selector: &str,
    use_example: bool,
) -> Result<SelectedTask, AppError> {
    let config = load_config(project_root)?;
    run_task::select(project_root, &config, selector, use_example)
}

/// List started tasks of the specified project in catalog order.
pub fn list_at(project_root: &Path) -> Result<Vec<TaskId>, AppError> {
    let config = load_config(project_root)?;
    list_tasks(&config.tasks_dir(project_root), config.project.language)
}
