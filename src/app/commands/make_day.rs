//! `make-day`: create a day's task files and pre-populate its input.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::domain::project::infer_year;
use crate::domain::{AppError, Day, Part, ProjectConfig, TaskId, day_input_file};
use crate::ports::{PuzzleInputClient, PuzzleInputRequest};

/// What happened to the day's input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Downloaded and written.
    Fetched,
    /// An existing input file was left alone.
    Kept,
    /// An empty placeholder was created.
    Placeholder,
}

/// Result of scaffolding a day.
#[derive(Debug, Clone)]
pub struct MakeDayOutcome {
    pub day: Day,
    /// Task files created with boilerplate content.
    pub created: Vec<PathBuf>,
    /// Task files that already existed and were not touched.
    pub existing: Vec<PathBuf>,
    pub input_path: PathBuf,
    pub input: InputOutcome,
}

/// Execute the make-day command.
///
/// `client` is `None` when no session is configured. A failed fetch is
/// logged and never replaces an existing input file.
pub fn execute<C: PuzzleInputClient>(
    project_root: &Path,
    config: &ProjectConfig,
    day: Day,
    client: Option<&C>,
    current_year: u16,
) -> Result<MakeDayOutcome, AppError> {
    let language = config.project.language;
    let tasks_dir = config.tasks_dir(project_root);
    let inputs_dir = config.inputs_dir(project_root);
    fs::create_dir_all(&tasks_dir)?;
    fs::create_dir_all(&inputs_dir)?;

    let mut created = Vec::new();
    let mut existing = Vec::new();
    for part in Part::ALL {
        let path = tasks_dir.join(TaskId::new(day, part).file_name(language.extension()));
        if path.exists() {
            existing.push(path);
        } else {
            fs::write(&path, language.task_boilerplate())?;
            created.push(path);
        }
    }

    let input_path = inputs_dir.join(day_input_file(day));
    let fetched = client.and_then(|client| {
        let year =
            config.project.year.unwrap_or_else(|| infer_year(&config.project.name, current_year));
        match client.fetch_input(PuzzleInputRequest { year, day }) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!("{}", err);
                None
            }
        }
    });

    let input = match fetched {
        Some(text) => {
            fs::write(&input_path, text)?;
            InputOutcome::Fetched
        }
        None if input_path.exists() => InputOutcome::Kept,
        None => {
            fs::write(&input_path, "")?;
            InputOutcome::Placeholder
        }
    };

    Ok(MakeDayOutcome { day, created, existing, input_path, input })
}
