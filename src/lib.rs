//! advent: scaffold Advent of Code projects and run their tasks.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InputOutcome, MakeDayOutcome, NewProjectOptions, NewProjectOutcome, RunOutcome, SelectedTask,
    list_at, make_day, make_day_at, new_project, run, run_at, select_at,
};
pub use domain::AppError;
