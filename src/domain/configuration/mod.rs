pub mod loader;
pub mod project_config;

pub use loader::{CONFIG_FILE, load_config, parse_config_content};
pub use project_config::{
    PathsConfig, ProjectConfig, ProjectSection, PuzzleInputConfig, RunnerConfig,
};
