//! Picks one task out of the catalog for a selection.

use log::debug;

use super::{AppError, Selection, TaskId};

/// Resolve `selection` against an ordered catalog.
///
/// Explicit selections scan the catalog from the end and take the first
/// match. For a bare day this means the highest authored part wins, so
/// `3` runs `3-2` as soon as that file has content.
pub fn resolve(selection: &Selection, catalog: &[TaskId]) -> Result<TaskId, AppError> {
    let Some(last) = catalog.last() else {
        return Err(AppError::NoTasksAvailable);
    };

    let found = match selection {
        Selection::Latest => Some(*last),
        Selection::Task(wanted) => catalog.iter().rev().find(|task| *task == wanted).copied(),
        Selection::Day(day) => catalog.iter().rev().find(|task| task.day == *day).copied(),
    };

    match found {
        Some(task) => {
            debug!("Selection '{}' resolved to task {}", selection, task);
            Ok(task)
        }
        None => Err(AppError::TaskNotFound(selection.to_string())),
    }
}
