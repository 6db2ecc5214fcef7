pub mod make_day;
pub mod new_project;
pub mod run_task;
