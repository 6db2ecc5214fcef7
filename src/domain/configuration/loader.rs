//! Project configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, ProjectConfig};

/// Name of the project configuration file at the project root.
pub const CONFIG_FILE: &str = "advent.toml";

/// Load and parse `advent.toml` from the project root.
pub fn load_config(project_root: &Path) -> Result<ProjectConfig, AppError> {
    let config_path = project_root.join(CONFIG_FILE);
    let content = fs::read_to_string(&config_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::ProjectConfigMissing(config_path.clone())
        } else {
            AppError::Io(err)
        }
    })?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
