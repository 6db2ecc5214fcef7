//! Template trees compiled into the binary.

use std::path::PathBuf;

use include_dir::{Dir, include_dir};

use super::materializer::TemplateTree;
use crate::domain::{AppError, Language};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The bundled template tree for `language`.
pub fn bundled_template(language: Language) -> Result<TemplateTree, AppError> {
    TEMPLATES_DIR
        .get_dir(language.template_dir())
        .map(TemplateTree::Embedded)
        .ok_or_else(|| AppError::TemplateNotFound(PathBuf::from(language.template_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::materializer::{MaterializeRequest, materialize_blocking, plan_entries};
    use std::fs;
    use tempfile::TempDir;

    fn planned(language: Language) -> Vec<PathBuf> {
        let tree = bundled_template(language).unwrap();
        plan_entries(&MaterializeRequest::new(tree, "/unused"))
            .unwrap()
            .into_iter()
            .map(|entry| entry.destination)
            .collect()
    }

    #[test]
    fn every_language_has_a_bundled_tree() {
        for language in Language::ALL {
            let files = planned(language);
            assert!(files.contains(&PathBuf::from("README.md")), "{language}");
            assert!(files.contains(&PathBuf::from(".gitignore")), "{language}");
        }
    }

    #[test]
    fn typescript_tree_paths_are_relative() {
        let files = planned(Language::TypeScript);
        assert!(files.contains(&PathBuf::from("src/input.ts")));
        assert!(files.contains(&PathBuf::from("tsconfig.json")));
        assert!(files.iter().all(|path| !path.starts_with("ts")));
    }

    #[test]
    fn bundled_tree_materializes_outside_the_crate() {
        let dest = TempDir::new().unwrap();
        let tree = bundled_template(Language::JavaScript).unwrap();

        materialize_blocking(&MaterializeRequest::new(tree, dest.path()).exclude("README.md"))
            .unwrap();

        assert!(dest.path().join("src/input.js").is_file());
        assert!(dest.path().join(".gitignore").is_file());
        assert!(!dest.path().join("README.md").exists());
        assert_eq!(
            fs::read_to_string(dest.path().join("src/input.js")).unwrap(),
            include_str!("../../templates/js/src/input.js")
        );
        assert!(!dest.path().join("tsconfig.json").exists());
    }
}
