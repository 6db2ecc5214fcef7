//! Input resolution for a day's task.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::{AppError, Day};

pub const EXAMPLE_INPUT_FILE: &str = "example.txt";
pub const DEFAULT_INPUT_FILE: &str = "default.txt";

/// Where a task's input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Example,
    Day(Day),
    Default,
}

impl InputSource {
    pub fn file_name(&self) -> String {
        match self {
            InputSource::Example => EXAMPLE_INPUT_FILE.to_string(),
            InputSource::Day(day) => day_input_file(*day),
            InputSource::Default => DEFAULT_INPUT_FILE.to_string(),
        }
    }

    pub fn path(&self, inputs_dir: &Path) -> PathBuf {
        inputs_dir.join(self.file_name())
    }
}

/// Input text together with the file it was read from. Content is untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub source: InputSource,
    pub content: String,
}

/// File name of the day-specific input, e.g. `3.txt`.
pub fn day_input_file(day: Day) -> String {
    format!("{}.txt", day)
}

/// Pick the input for `day`.
///
/// Example mode reads only `example.txt`. Otherwise `<day>.txt` is preferred
/// over `default.txt`.
pub fn resolve_input(
    inputs_dir: &Path,
    day: Day,
    use_example: bool,
) -> Result<ResolvedInput, AppError> {
    if use_example {
        let path = InputSource::Example.path(inputs_dir);
        return match read_if_present(&path)? {
            Some(content) => Ok(ResolvedInput { source: InputSource::Example, content }),
            None => Err(AppError::ExampleInputMissing(path)),
        };
    }

    for source in [InputSource::Day(day), InputSource::Default] {
        if let Some(content) = read_if_present(&source.path(inputs_dir))? {
            debug!("Using {} as input for day {}", source.file_name(), day);
            return Ok(ResolvedInput { source, content });
        }
    }

    Err(AppError::InputUnavailable { day: day.get() })
}

/// Interpret the example-mode argument: `t`, `true`, `y` or `yes`, any case.
pub fn parse_example_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "t" | "true" | "y" | "yes")
}

fn read_if_present(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(AppError::Io(err)),
    }
}
