//! Template tree instantiation.
//!
//! Files are planned up front with a non-following directory walk, then
//! copied concurrently. Every copy is awaited and every failure reported.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use futures::future::join_all;
use include_dir::{Dir, DirEntry, File};
use log::{debug, info};
use walkdir::WalkDir;

use crate::domain::{AppError, CopyFailure, RenameRule, Substitutions, TemplateEntry};

/// Where template files are read from.
#[derive(Debug, Clone)]
pub enum TemplateTree {
    /// A directory on disk.
    Directory(PathBuf),
    /// A tree compiled into the binary.
    Embedded(&'static Dir<'static>),
}

impl TemplateTree {
    fn missing(&self, relative: &Path) -> AppError {
        match self {
            TemplateTree::Directory(root) => AppError::TemplateNotFound(root.join(relative)),
            TemplateTree::Embedded(dir) => AppError::TemplateNotFound(dir.path().join(relative)),
        }
    }

    fn embedded_file(
        dir: &'static Dir<'static>,
        relative: &Path,
    ) -> io::Result<&'static File<'static>> {
        dir.get_file(dir.path().join(relative)).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} is not bundled", relative.display()))
        })
    }

    async fn read(&self, relative: &Path) -> io::Result<Vec<u8>> {
        match self {
            TemplateTree::Directory(root) => tokio::fs::read(root.join(relative)).await,
            TemplateTree::Embedded(dir) => {
                Ok(Self::embedded_file(dir, relative)?.contents().to_vec())
            }
        }
    }

    fn read_to_string(&self, relative: &Path) -> io::Result<String> {
        match self {
            TemplateTree::Directory(root) => fs::read_to_string(root.join(relative)),
            TemplateTree::Embedded(dir) => Self::embedded_file(dir, relative)?
                .contents_utf8()
                .map(str::to_string)
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidData, "template is not valid UTF-8")
                }),
        }
    }
}

impl fmt::Display for TemplateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateTree::Directory(root) => write!(f, "{}", root.display()),
            TemplateTree::Embedded(dir) => write!(f, "bundled {}", dir.path().display()),
        }
    }
}

impl From<&Path> for TemplateTree {
    fn from(root: &Path) -> Self {
        TemplateTree::Directory(root.to_path_buf())
    }
}

impl From<PathBuf> for TemplateTree {
    fn from(root: PathBuf) -> Self {
        TemplateTree::Directory(root)
    }
}

impl From<&PathBuf> for TemplateTree {
    fn from(root: &PathBuf) -> Self {
        TemplateTree::Directory(root.clone())
    }
}

/// What to copy where.
#[derive(Debug, Clone)]
pub struct MaterializeRequest {
    pub source: TemplateTree,
    pub destination_root: PathBuf,
    pub rename_rule: RenameRule,
    /// Source-relative paths skipped by the walk.
    pub excluded: BTreeSet<PathBuf>,
}

impl MaterializeRequest {
    pub fn new<S: Into<TemplateTree>, D: Into<PathBuf>>(source: S, destination_root: D) -> Self {
        Self {
            source: source.into(),
            destination_root: destination_root.into(),
            rename_rule: RenameRule,
            excluded: BTreeSet::new(),
        }
    }

    pub fn exclude<P: Into<PathBuf>>(mut self, relative: P) -> Self {
        self.excluded.insert(relative.into());
        self
    }
}

/// List every file the request would write, in walk order.
///
/// Symbolic links are neither followed nor copied, so nothing outside the
/// source root is read.
pub fn plan_entries(request: &MaterializeRequest) -> Result<Vec<TemplateEntry>, AppError> {
    let sources = match &request.source {
        TemplateTree::Directory(root) => directory_files(root)?,
        TemplateTree::Embedded(dir) => embedded_files(dir),
    };

    let mut entries = Vec::new();
    let mut destinations = HashSet::new();

    for relative in sources {
        if request.excluded.contains(&relative) {
            debug!("Excluding {} from template copy", relative.display());
            continue;
        }

        let destination = request.rename_rule.destination_for(&relative)?;
        if !destinations.insert(destination.clone()) {
            return Err(AppError::TemplateCollision(destination));
        }
        entries.push(TemplateEntry { source: relative, destination });
    }

    Ok(entries)
}

fn directory_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !root.is_dir() {
        return Err(AppError::TemplateNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| AppError::UnsafeTemplatePath(entry.path().to_path_buf()))?;
        files.push(relative.to_path_buf());
    }
    Ok(files)
}

fn embedded_files(dir: &'static Dir<'static>) -> Vec<PathBuf> {
    fn collect(dir: &'static Dir<'static>, files: &mut Vec<&'static Path>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(child) => collect(child, files),
                DirEntry::File(file) => files.push(file.path()),
            }
        }
    }

    let mut paths = Vec::new();
    collect(dir, &mut paths);
    let mut files: Vec<PathBuf> = paths
        .into_iter()
        .filter_map(|path| path.strip_prefix(dir.path()).ok())
        .map(Path::to_path_buf)
        .collect();
    files.sort();
    files
}

/// Copy the template tree, returning the absolute paths written.
///
/// Copies run concurrently with no ordering guarantee. Files written before
/// a failure are left in place.
pub async fn materialize(request: &MaterializeRequest) -> Result<Vec<PathBuf>, AppError> {
    let entries = plan_entries(request)?;

    let copies = entries.iter().map(|entry| {
        copy_entry(&request.source, &entry.source, request.destination_root.join(&entry.destination))
    });

    let mut written = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();
    for result in join_all(copies).await {
        match result {
            Ok(path) => written.push(path),
            Err(failure) => failures.push(failure),
        }
    }

    if !failures.is_empty() {
        return Err(AppError::Materialization { failures });
    }

    info!(
        "Materialized {} file(s) from {} into {}",
        written.len(),
        request.source,
        request.destination_root.display()
    );
    Ok(written)
}

/// Run [`materialize`] to completion on a single-threaded runtime.
pub fn materialize_blocking(request: &MaterializeRequest) -> Result<Vec<PathBuf>, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(materialize(request))
}

async fn copy_entry(tree: &TemplateTree, from: &Path, to: PathBuf) -> Result<PathBuf, CopyFailure> {
    match copy_bytes(tree, from, &to).await {
        Ok(()) => Ok(to),
        Err(source) => Err(CopyFailure { destination: to, source }),
    }
}

async fn copy_bytes(tree: &TemplateTree, from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = tree.read(from).await?;
    tokio::fs::write(to, bytes).await
}

/// Read a text file from the template tree, substitute placeholders and
/// write it to `destination`.
pub fn render_file(
    tree: &TemplateTree,
    relative: &Path,
    destination: &Path,
    substitutions: &Substitutions,
) -> Result<(), AppError> {
    let template = tree.read_to_string(relative).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            tree.missing(relative)
        } else {
            AppError::Io(err)
        }
    })?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, substitutions.apply(&template))?;
    Ok(())
}
