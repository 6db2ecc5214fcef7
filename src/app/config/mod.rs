mod package_manager;
mod session;
mod templates;

pub use package_manager::{USER_AGENT_ENV, detect_package_manager};
pub use session::{DOTENV_FILE, resolve_session};
pub use templates::{TEMPLATES_ENV, template_root};
