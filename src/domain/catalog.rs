//! Task catalog: the ordered list of tasks the user has started.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{AppError, Language, TaskId};

/// A started task and the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFile {
    pub task: TaskId,
    pub path: PathBuf,
}

/// Scan `tasks_dir` and return every started task, sorted by (day, part).
///
/// A file counts as a task when its stem is `<day>-<part>`, its extension
/// matches `language`, and it is larger than the language's boilerplate.
/// The directory is re-read on every call.
pub fn list_tasks(tasks_dir: &Path, language: Language) -> Result<Vec<TaskId>, AppError> {
    Ok(scan_task_files(tasks_dir, language)?.into_iter().map(|file| file.task).collect())
}

/// Like [`list_tasks`], keeping the path of each task file.
///
/// A zero-padded stem such as `05-1` names the same task as `5-1`. Each task
/// appears once; the canonical file name wins over padded ones.
pub fn scan_task_files(tasks_dir: &Path, language: Language) -> Result<Vec<TaskFile>, AppError> {
    if !tasks_dir.is_dir() {
        return Err(AppError::TaskStorageMissing(tasks_dir.to_path_buf()));
    }

    let boilerplate_len = language.task_boilerplate().len() as u64;
    let mut files = Vec::new();

    for entry in fs::read_dir(tasks_dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(task) = task_for_path(&path, language) else {
            continue;
        };

        // Follows symlinks; dangling links are skipped.
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        if metadata.len() <= boilerplate_len {
            debug!("Skipping untouched task file {}", path.display());
            continue;
        }

        files.push(TaskFile { task, path });
    }

    let extension = language.extension();
    files.sort_by(|a, b| {
        a.task
            .cmp(&b.task)
            .then_with(|| is_padded(a, extension).cmp(&is_padded(b, extension)))
            .then_with(|| a.path.cmp(&b.path))
    });
    files.dedup_by(|later, kept| {
        let duplicate = later.task == kept.task;
        if duplicate {
            debug!("Ignoring {} in favour of {}", later.path.display(), kept.path.display());
        }
        duplicate
    });
    Ok(files)
}

fn is_padded(file: &TaskFile, extension: &str) -> bool {
    file.path.file_name().and_then(|name| name.to_str())
        != Some(file.task.file_name(extension).as_str())
}

fn task_for_path(path: &Path, language: Language) -> Option<TaskId> {
    let extension = path.extension()?.to_str()?;
    if extension != language.extension() {
        return None;
    }
    TaskId::from_file_stem(path.file_stem()?.to_str()?)
}
