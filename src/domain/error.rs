use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single file copy that failed during template materialization.
#[derive(Debug)]
pub struct CopyFailure {
    pub destination: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.destination.display(), self.source)
    }
}

/// Library-wide error type for advent operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Task selector is malformed or names a day outside 1-25.
    #[error("\"{selector}\" is not valid as a task identifier: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Day argument is not an integer in 1-25.
    #[error("day={0} is not a valid day (must be 1-25)")]
    InvalidDay(String),

    /// Task directory does not exist.
    #[error("Task folder does not exist: {0}")]
    TaskStorageMissing(PathBuf),

    /// Task directory holds no authored task files.
    #[error("No tasks to run were found.")]
    NoTasksAvailable,

    /// Selector is well-formed but matches no authored task.
    #[error("No task found for the target \"{0}\"")]
    TaskNotFound(String),

    /// Neither the day file nor the default input file exists.
    #[error("Neither day ({day}) nor default input file exists")]
    InputUnavailable { day: u8 },

    /// Example mode was requested but the example file is missing.
    #[error("The example file doesn't exist: {0}")]
    ExampleInputMissing(PathBuf),

    /// One or more template files could not be written.
    #[error("Failed to write {} template file(s): {}", .failures.len(), join_failures(.failures))]
    Materialization { failures: Vec<CopyFailure> },

    /// Template directory for the requested language is missing.
    #[error("Template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Template entry would resolve outside of the destination root.
    #[error("Template path escapes the destination root: {0}")]
    UnsafeTemplatePath(PathBuf),

    /// Two template files map to the same destination path.
    #[error("Template files collide at destination: {0}")]
    TemplateCollision(PathBuf),

    /// Package name does not follow npm naming rules.
    #[error("Invalid project name '{0}'")]
    InvalidPackageName(String),

    /// Destination directory already has content.
    #[error("Application directory is not empty: {0}")]
    DirectoryNotEmpty(PathBuf),

    /// The directory the project would be created in is not writable.
    #[error(
        "It is not possible to write to the application path: {0}. You may lack write permission for this folder."
    )]
    DestinationNotWritable(PathBuf),

    /// No advent.toml at the project root.
    #[error("Project config not found at {0}. Run 'advent new' first.")]
    ProjectConfigMissing(PathBuf),

    /// Config values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Remote puzzle input request failed.
    #[error("Failed to fetch puzzle input: {message}")]
    PuzzleInputError { message: String, status: Option<u16> },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// Task process could not be started.
    #[error("Failed to launch '{command}': {details}")]
    LaunchError { command: String, details: String },
}

fn join_failures(failures: &[CopyFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl AppError {
    pub fn invalid_selector<S: Into<String>, R: Into<String>>(selector: S, reason: R) -> Self {
        AppError::InvalidSelector { selector: selector.into(), reason: reason.into() }
    }

    /// Map the error onto the closest `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidSelector { .. }
            | AppError::InvalidDay(_)
            | AppError::InvalidPackageName(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::UnsafeTemplatePath(_)
            | AppError::TemplateCollision(_) => io::ErrorKind::InvalidInput,
            AppError::TaskStorageMissing(_)
            | AppError::NoTasksAvailable
            | AppError::TaskNotFound(_)
            | AppError::InputUnavailable { .. }
            | AppError::ExampleInputMissing(_)
            | AppError::TemplateNotFound(_)
            | AppError::ProjectConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::DirectoryNotEmpty(_) => io::ErrorKind::AlreadyExists,
            AppError::DestinationNotWritable(_) => io::ErrorKind::PermissionDenied,
            AppError::Materialization { .. }
            | AppError::PuzzleInputError { .. }
            | AppError::LaunchError { .. }
            | AppError::PromptError(_) => io::ErrorKind::Other,
        }
    }
}
