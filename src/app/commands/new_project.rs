//! `new`: instantiate a project from the language template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::adapters::{
    MaterializeRequest, TemplateTree, bundled_template, materialize_blocking, render_file,
};
use crate::app::config::DOTENV_FILE;
use crate::domain::project::{is_valid_package_name, package_manifest, readme_substitutions};
use crate::domain::{
    AppError, CONFIG_FILE, Language, PackageManager, ProjectConfig, ProjectSection, Runtime,
};

const README: &str = "README.md";
const PACKAGE_JSON: &str = "package.json";

/// Fully resolved answers for a new project.
#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    /// Directory to create the project in.
    pub destination: PathBuf,
    /// Package name written to `package.json` and `advent.toml`.
    pub name: String,
    pub year: u16,
    pub language: Language,
    pub runtime: Runtime,
    /// Package manager named in the README instructions.
    pub package_manager: PackageManager,
    /// Include a prettier configuration in `package.json`.
    pub prettier: bool,
    /// Directory containing one template tree per language. `None` uses the
    /// templates compiled into the binary.
    pub template_root: Option<PathBuf>,
}

/// Result of creating a project.
#[derive(Debug, Clone)]
pub struct NewProjectOutcome {
    pub root: PathBuf,
    /// Every file written, template copies first.
    pub written: Vec<PathBuf>,
}

/// Execute the new-project command.
pub fn execute(options: &NewProjectOptions) -> Result<NewProjectOutcome, AppError> {
    if !is_valid_package_name(&options.name) {
        return Err(AppError::InvalidPackageName(options.name.clone()));
    }

    let root = options.destination.clone();
    ensure_empty_destination(&root)?;

    let tree = match &options.template_root {
        Some(template_root) => {
            TemplateTree::Directory(template_root.join(options.language.template_dir()))
        }
        None => bundled_template(options.language)?,
    };
    let request = MaterializeRequest::new(tree, &root).exclude(README);
    let mut written = materialize_blocking(&request)?;

    let substitutions = readme_substitutions(
        &options.name,
        options.year,
        options.language,
        options.runtime,
        options.package_manager,
    );
    let readme = root.join(README);
    render_file(&request.source, Path::new(README), &readme, &substitutions)?;
    written.push(readme);

    let manifest =
        package_manifest(&options.name, options.language, options.runtime, options.prettier);
    let manifest_text = serde_json::to_string_pretty(&manifest)
        .map_err(|e| AppError::InvalidConfig(format!("Failed to render package.json: {}", e)))?;
    written.push(write_file(&root, PACKAGE_JSON, &format!("{}\n", manifest_text))?);

    let config = ProjectConfig::new(ProjectSection {
        name: options.name.clone(),
        year: Some(options.year),
        language: options.language,
        runtime: options.runtime,
    });
    written.push(write_file(&root, CONFIG_FILE, &config.to_toml()?)?);
    written.push(write_file(&root, DOTENV_FILE, "AOC_SESSION=")?);

    fs::create_dir_all(config.tasks_dir(&root))?;
    fs::create_dir_all(config.inputs_dir(&root))?;

    info!("Created {} project '{}' at {}", options.language, options.name, root.display());
    Ok(NewProjectOutcome { root, written })
}

fn ensure_empty_destination(root: &Path) -> Result<(), AppError> {
    if root.exists() {
        if !root.is_dir() || fs::read_dir(root)?.next().is_some() {
            return Err(AppError::DirectoryNotEmpty(root.to_path_buf()));
        }
    } else {
        fs::create_dir_all(root).map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => {
                AppError::DestinationNotWritable(root.parent().unwrap_or(root).to_path_buf())
            }
            _ => AppError::Io(err),
        })?;
    }
    Ok(())
}

fn write_file(root: &Path, name: &str, content: &str) -> Result<PathBuf, AppError> {
    let path = root.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
