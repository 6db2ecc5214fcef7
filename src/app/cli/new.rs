//! New command: collect answers interactively, then create the project.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api::{self, NewProjectOptions};
use crate::app::config::{detect_package_manager, template_root};
use crate::domain::project::is_valid_package_name;
use crate::domain::{AppError, Language, PackageManager, Runtime};

/// Answers given on the command line. Missing ones are prompted for.
pub struct NewArgs {
    pub name: Option<String>,
    pub year: Option<u16>,
    pub language: Option<Language>,
    pub runtime: Option<Runtime>,
    pub package_manager: Option<PackageManager>,
    pub prettier: bool,
    pub templates: Option<PathBuf>,
    pub yes: bool,
}

pub fn run_new(project: Option<PathBuf>, args: NewArgs) -> Result<(), AppError> {
    let Some(options) = resolve_options(project, args)? else {
        return Ok(());
    };
    let outcome = api::new_project(&options)?;

    println!("✅ Created {} project at {}/", options.language, outcome.root.display());
    println!(
        "  Next: cd {} && {} install",
        outcome.root.display(),
        options.package_manager.name()
    );
    Ok(())
}

fn resolve_options(
    project: Option<PathBuf>,
    args: NewArgs,
) -> Result<Option<NewProjectOptions>, AppError> {
    let parent = match project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let year = match args.year {
        Some(year) => year,
        None if args.yes => api::current_year(),
        None => match prompt_year(api::current_year())? {
            Some(year) => year,
            None => return Ok(None),
        },
    };

    let default_name = format!("advent-of-code-{}", year);
    let name = match args.name {
        Some(name) => name,
        None if args.yes => default_name,
        None => match prompt_name(&default_name)? {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    let language = match args.language {
        Some(language) => language,
        None if args.yes => Language::default(),
        None => match prompt_choice("Language", &Language::ALL, Language::default())? {
            Some(language) => language,
            None => return Ok(None),
        },
    };

    let package_manager = match args.package_manager.or_else(detect_package_manager) {
        Some(package_manager) => package_manager,
        None if args.yes => PackageManager::default(),
        None => match prompt_choice("Package manager", &PackageManager::ALL, PackageManager::Npm)? {
            Some(package_manager) => package_manager,
            None => return Ok(None),
        },
    };

    let runtime = match args.runtime {
        Some(runtime) => runtime,
        None if args.yes => package_manager.runtime(),
        None => match prompt_choice("Runtime", &Runtime::ALL, package_manager.runtime())? {
            Some(runtime) => runtime,
            None => return Ok(None),
        },
    };

    let prettier = if args.prettier || args.yes {
        args.prettier
    } else {
        match prompt_prettier()? {
            Some(value) => value,
            None => return Ok(None),
        }
    };

    Ok(Some(NewProjectOptions {
        destination: parent.join(&name),
        name,
        year,
        language,
        runtime,
        package_manager,
        prettier,
        template_root: template_root(args.templates.as_deref()),
    }))
}

fn prompt_year(default: u16) -> Result<Option<u16>, AppError> {
    let result = Input::<u16>::new().with_prompt("Year").default(default).interact_text();
    cancellable(result, "year")
}

fn prompt_name(default: &str) -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt("Package name")
        .default(default.to_string())
        .validate_with(|value: &String| -> Result<(), &str> {
            if is_valid_package_name(value) { Ok(()) } else { Err("Invalid npm package name") }
        })
        .interact_text();
    cancellable(result, "package name")
}

fn prompt_choice<T: Copy + PartialEq + std::fmt::Display>(
    prompt: &str,
    choices: &[T],
    default: T,
) -> Result<Option<T>, AppError> {
    let items: Vec<String> = choices.iter().map(|choice| choice.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(choices.iter().position(|choice| *choice == default).unwrap_or(0))
        .interact_opt()
        .map_err(|err| {
            AppError::PromptError(format!("Failed to select {}: {}", prompt.to_lowercase(), err))
        })?;

    Ok(selection.map(|index| choices[index]))
}

fn prompt_prettier() -> Result<Option<bool>, AppError> {
    Confirm::new()
        .with_prompt("Add prettier configuration?")
        .default(false)
        .interact_opt()
        .map_err(|err| AppError::PromptError(format!("Failed to read prettier choice: {}", err)))
}

fn cancellable<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::PromptError(format!("Failed to read {}: {}", what, err))),
    }
}
