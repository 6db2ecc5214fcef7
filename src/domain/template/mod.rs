//! Pure rules applied while instantiating a template tree.

mod rename;
mod substitution;

pub use rename::{KEEP_PREFIX, RenameRule};
pub use substitution::Substitutions;

use std::path::PathBuf;

/// One file of a template tree and where it lands in the destination.
///
/// Both paths are relative; they differ only when the rename rule applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}
