use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Base-name prefix marking template files that packaging tools would
/// otherwise drop, e.g. `__KEEP.gitignore`.
pub const KEEP_PREFIX: &str = "__KEEP";

/// Maps a template-relative path to its destination-relative path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameRule;

impl RenameRule {
    /// Strip the keep prefix from the base name; the directory part is untouched.
    ///
    /// Rejects paths that are absolute or contain `..`, so the result always
    /// stays under whatever root it is joined to.
    pub fn destination_for(&self, relative: &Path) -> Result<PathBuf, AppError> {
        let is_plain = relative.components().all(|c| matches!(c, Component::Normal(_)));
        if !is_plain || relative.as_os_str().is_empty() {
            return Err(AppError::UnsafeTemplatePath(relative.to_path_buf()));
        }

        let Some(file_name) = relative.file_name().and_then(|name| name.to_str()) else {
            return Ok(relative.to_path_buf());
        };

        match file_name.strip_prefix(KEEP_PREFIX) {
            Some(stripped) if !stripped.is_empty() => Ok(relative.with_file_name(stripped)),
            _ => Ok(relative.to_path_buf()),
        }
    }
}
