pub mod bundled_templates;
pub mod materializer;
pub mod process_launcher;
pub mod puzzle_input_http;

pub use bundled_templates::bundled_template;
pub use materializer::{
    MaterializeRequest, TemplateTree, materialize, materialize_blocking, plan_entries, render_file,
};
pub use process_launcher::ProcessTaskLauncher;
pub use puzzle_input_http::{HttpPuzzleInputClient, SESSION_ENV};
