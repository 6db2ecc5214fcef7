//! Puzzle site session lookup.

use std::env;
use std::fs;
use std::path::Path;

use log::debug;

use crate::adapters::SESSION_ENV;

/// Dotenv file written into every generated project.
pub const DOTENV_FILE: &str = ".env";

/// Find the session cookie: the environment first, then the project's `.env`.
///
/// Empty values count as absent.
pub fn resolve_session(project_root: &Path) -> Option<String> {
    if let Some(value) = env::var(SESSION_ENV).ok().filter(|v| !v.trim().is_empty()) {
        return Some(value.trim().to_string());
    }

    let content = fs::read_to_string(project_root.join(DOTENV_FILE)).ok()?;
    let value = dotenv_value(&content, SESSION_ENV);
    if value.is_some() {
        debug!("Using {} from {}", SESSION_ENV, DOTENV_FILE);
    }
    value
}

fn dotenv_value(content: &str, key: &str) -> Option<String> {
    content.lines().rev().find_map(|line| {
        let line = line.trim();
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (name, value) = line.split_once('=')?;
        if name.trim() != key {
            return None;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    struct EnvGuard(Option<String>);

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let previous = env::var(SESSION_ENV).ok();
            unsafe {
                match value {
                    Some(v) => env::set_var(SESSION_ENV, v),
                    None => env::remove_var(SESSION_ENV),
                }
            }
            Self(previous)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            unsafe {
                match &self.0 {
                    Some(v) => env::set_var(SESSION_ENV, v),
                    None => env::remove_var(SESSION_ENV),
                }
            }
        }
    }

    #[test]
    fn dotenv_parsing() {
        assert_eq!(dotenv_value("AOC_SESSION=abc\n", "AOC_SESSION"), Some("abc".into()));
        assert_eq!(dotenv_value("export AOC_SESSION=\"q\"\n", "AOC_SESSION"), Some("q".into()));
        assert_eq!(dotenv_value("AOC_SESSION='s'", "AOC_SESSION"), Some("s".into()));
        assert_eq!(dotenv_value("AOC_SESSION=", "AOC_SESSION"), None);
        assert_eq!(dotenv_value("OTHER=1", "AOC_SESSION"), None);
        assert_eq!(dotenv_value("AOC_SESSION=a\nAOC_SESSION=b", "AOC_SESSION"), Some("b".into()));
    }

    #[test]
    #[serial]
    fn environment_wins_over_dotenv() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DOTENV_FILE), "AOC_SESSION=from-file\n").unwrap();
        let _guard = EnvGuard::set(Some("from-env"));

        assert_eq!(resolve_session(tmp.path()), Some("from-env".into()));
    }

    #[test]
    #[serial]
    fn falls_back_to_dotenv() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DOTENV_FILE), "AOC_SESSION=from-file\n").unwrap();
        let _guard = EnvGuard::set(None);

        assert_eq!(resolve_session(tmp.path()), Some("from-file".into()));
    }

    #[test]
    #[serial]
    fn freshly_generated_dotenv_has_no_session() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DOTENV_FILE), "AOC_SESSION=").unwrap();
        let _guard = EnvGuard::set(Some("   "));

        assert_eq!(resolve_session(tmp.path()), None);
    }
}
