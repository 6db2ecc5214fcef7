//! Metadata of a generated project: naming, puzzle year and package manifest.

use log::warn;
use serde_json::{Map, Value, json};

use super::{Language, PackageManager, Runtime, Substitutions};

/// Earliest puzzle year.
pub const FIRST_PUZZLE_YEAR: u16 = 2015;

/// Check a package name against npm naming rules, scoped names included.
pub fn is_valid_package_name(name: &str) -> bool {
    let unscoped = match name.strip_prefix('@') {
        Some(scoped) => {
            let Some((scope, rest)) = scoped.split_once('/') else {
                return false;
            };
            if !is_name_part(scope, |c| matches!(c, '-' | '*' | '~'), |c| {
                matches!(c, '-' | '*' | '.' | '_' | '~')
            }) {
                return false;
            }
            rest
        }
        None => name,
    };

    is_name_part(unscoped, |c| matches!(c, '-' | '~'), |c| matches!(c, '-' | '.' | '_' | '~'))
}

fn is_name_part(
    part: &str,
    first_extra: impl Fn(char) -> bool,
    rest_extra: impl Fn(char) -> bool,
) -> bool {
    let lower_or_digit = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if lower_or_digit(first) || first_extra(first) => {
            chars.all(|c| lower_or_digit(c) || rest_extra(c))
        }
        _ => false,
    }
}

/// Infer the puzzle year from a package name such as `advent-of-code-2023` or `aoc23`.
///
/// A single four-digit group wins; otherwise a single two-digit group is
/// placed in the current century. Anything else falls back to `current_year`.
pub fn infer_year(name: &str, current_year: u16) -> u16 {
    let groups: Vec<&str> = name
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| group.len() == 4 || group.len() == 2)
        .collect();

    let four: Vec<&str> = groups.iter().copied().filter(|g| g.len() == 4).collect();
    let two: Vec<&str> = groups.iter().copied().filter(|g| g.len() == 2).collect();

    let inferred = match (four.as_slice(), two.as_slice()) {
        ([year], _) => year.parse().ok(),
        (_, [short]) => short.parse::<u16>().ok().map(|short| current_year / 100 * 100 + short),
        _ => None,
    };

    let year = inferred.unwrap_or_else(|| {
        warn!("Could not find year in package name \"{}\"", name);
        current_year
    });

    if !(FIRST_PUZZLE_YEAR..=current_year).contains(&year) {
        warn!("Year {} may be out of bounds for advent of code", year);
    }
    year
}

/// Build the `package.json` of a generated project.
pub fn package_manifest(name: &str, language: Language, runtime: Runtime, prettier: bool) -> Value {
    let mut manifest = Map::new();
    manifest.insert("name".into(), json!(name));
    manifest.insert("type".into(), json!("module"));
    manifest.insert(
        "scripts".into(),
        json!({
            "task": "advent run",
            "make-day": "advent make-day",
        }),
    );

    if language == Language::TypeScript {
        let dev_dependencies = match runtime {
            Runtime::Bun => json!({ "@types/bun": "latest", "typescript": "^5" }),
            Runtime::Node => json!({ "@types/node": "latest", "typescript": "^5", "tsx": "^4" }),
        };
        manifest.insert("devDependencies".into(), dev_dependencies);
    }

    if prettier {
        manifest.insert(
            "prettier".into(),
            json!({
                "arrowParens": "always",
                "bracketSpacing": true,
                "jsxSingleQuote": false,
                "printWidth": 100,
                "semi": true,
                "tabWidth": 2,
                "useTabs": true,
                "trailingComma": "es5",
            }),
        );
    }

    Value::Object(manifest)
}

/// Placeholder values for the template README.
pub fn readme_substitutions(
    name: &str,
    year: u16,
    language: Language,
    runtime: Runtime,
    package_manager: PackageManager,
) -> Substitutions {
    Substitutions::new()
        .set("name", name)
        .set("year", year.to_string())
        .set("lang", format!("{} and {}", language.label(), runtime.label()))
        .set("packageManager", package_manager.name())
        .set("packageManagerRun", package_manager.run_prefix())
}
