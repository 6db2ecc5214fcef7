use std::env;

use log::debug;

use crate::domain::PackageManager;

/// Set by npm, pnpm, yarn and bun for the processes they launch.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Package manager that launched this process, if any.
pub fn detect_package_manager() -> Option<PackageManager> {
    let agent = env::var(USER_AGENT_ENV).ok()?;
    let detected = PackageManager::from_user_agent(&agent);
    debug!("Package manager from user agent \"{}\": {:?}", agent, detected);
    detected
}
