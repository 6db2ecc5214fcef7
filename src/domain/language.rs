//! Language targets for generated projects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source language of a generated project and its task files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    /// Extension of task files, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Content written into a freshly created task file.
    ///
    /// A task only counts as started once its file grows beyond this.
    pub fn task_boilerplate(self) -> &'static str {
        match self {
            Language::TypeScript => "import { input } from \"../src/input\";\n",
            Language::JavaScript => "import { input } from \"../src/input.js\";\n",
        }
    }

    /// Directory under the template root holding this language's template tree.
    pub fn template_dir(self) -> &'static str {
        self.extension()
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Command prefix that executes a single source file of this language.
    pub fn runner(self, runtime: Runtime) -> Vec<String> {
        let parts: &[&str] = match (runtime, self) {
            (Runtime::Bun, _) => &["bun", "run"],
            (Runtime::Node, Language::TypeScript) => &["tsx"],
            (Runtime::Node, Language::JavaScript) => &["node"],
        };
        parts.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(Language::TypeScript),
            "js" | "javascript" => Ok(Language::JavaScript),
            other => Err(format!("unknown language '{}': expected ts or js", other)),
        }
    }
}

/// JavaScript runtime that executes tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    #[default]
    Node,
    Bun,
}

impl Runtime {
    pub const ALL: [Runtime; 2] = [Runtime::Node, Runtime::Bun];

    pub fn label(self) -> &'static str {
        match self {
            Runtime::Node => "Node",
            Runtime::Bun => "Bun",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "node" => Ok(Runtime::Node),
            "bun" => Ok(Runtime::Bun),
            other => Err(format!("unknown runtime '{}': expected node or bun", other)),
        }
    }
}

/// Package manager the generated project is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Bun,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] =
        [PackageManager::Npm, PackageManager::Bun, PackageManager::Pnpm, PackageManager::Yarn];

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Command a user types to run a package script.
    pub fn run_prefix(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            other => other.name(),
        }
    }

    /// Runtime that goes with this package manager when none is chosen.
    pub fn runtime(self) -> Runtime {
        match self {
            PackageManager::Bun => Runtime::Bun,
            _ => Runtime::Node,
        }
    }

    /// Package manager named by an `npm_config_user_agent` value,
    /// e.g. `pnpm/8.15.1 npm/? node/v20.11.0 linux x64`.
    pub fn from_user_agent(agent: &str) -> Option<Self> {
        let first = agent.split_whitespace().next()?;
        let (name, _version) = first.split_once('/')?;
        name.parse().ok()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown package manager '{}': expected npm, bun, pnpm or yarn", s)
            })
    }
}
