use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the template root.
pub const TEMPLATES_ENV: &str = "ADVENT_TEMPLATES";

/// Directory holding one template tree per language.
///
/// An explicit path wins, then `ADVENT_TEMPLATES`. `None` selects the
/// templates compiled into the binary.
pub fn template_root(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    match env::var_os(TEMPLATES_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn explicit_path_wins() {
        unsafe { env::set_var(TEMPLATES_ENV, "/from/env") };
        let root = template_root(Some(Path::new("/explicit")));
        unsafe { env::remove_var(TEMPLATES_ENV) };

        assert_eq!(root, Some(PathBuf::from("/explicit")));
    }

    #[test]
    #[serial]
    fn environment_then_bundled_templates() {
        unsafe { env::set_var(TEMPLATES_ENV, "/from/env") };
        assert_eq!(template_root(None), Some(PathBuf::from("/from/env")));

        unsafe { env::set_var(TEMPLATES_ENV, "") };
        assert_eq!(template_root(None), None);

        unsafe { env::remove_var(TEMPLATES_ENV) };
        assert_eq!(template_root(None), None);
    }
}
