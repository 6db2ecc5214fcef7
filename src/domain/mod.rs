pub mod catalog;
pub mod configuration;
pub mod error;
pub mod input;
pub mod language;
pub mod project;
pub mod resolver;
pub mod selector;
pub mod template;

pub use catalog::{TaskFile, list_tasks, scan_task_files};
pub use configuration::{
    CONFIG_FILE, PathsConfig, ProjectConfig, ProjectSection, PuzzleInputConfig, RunnerConfig,
    load_config, parse_config_content,
};
pub use error::{AppError, CopyFailure};
pub use input::{InputSource, ResolvedInput, day_input_file, parse_example_flag, resolve_input};
pub use language::{Language, PackageManager, Runtime};
pub use resolver::resolve;
pub use selector::{Day, Part, Selection, TaskId};
pub use template::{KEEP_PREFIX, RenameRule, Substitutions, TemplateEntry};
