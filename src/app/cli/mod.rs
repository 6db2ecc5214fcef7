//! CLI Adapter.

mod new;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::app::api;
use crate::app::commands::make_day::InputOutcome;
use crate::domain::{AppError, Day, Language, PackageManager, Runtime, parse_example_flag};

#[derive(Parser)]
#[command(name = "advent")]
#[command(version)]
#[command(about = "Scaffold and run Advent of Code projects", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    project: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a language template
    #[clap(visible_alias = "n")]
    New {
        /// Package name (also the directory name)
        name: Option<String>,
        /// Puzzle year
        #[arg(long)]
        year: Option<u16>,
        /// Language: ts or js
        #[arg(short, long)]
        language: Option<Language>,
        /// Runtime: node or bun (defaults to bun for the bun package manager)
        #[arg(short, long)]
        runtime: Option<Runtime>,
        /// Package manager: npm, bun, pnpm or yarn (detected from npm_config_user_agent)
        #[arg(short, long)]
        package_manager: Option<PackageManager>,
        /// Add a prettier configuration to package.json
        #[arg(long)]
        prettier: bool,
        /// Directory holding the language template trees
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Accept defaults instead of prompting
        #[arg(short, long)]
        yes: bool,
    },
    /// Create task files and input for a day
    #[clap(name = "make-day", visible_alias = "md")]
    MakeDay {
        /// Day number (1-25)
        day: String,
    },
    /// Run a task
    #[clap(visible_alias = "r")]
    Run {
        /// `latest`, `l`, a day (`3`) or a day and part (`3-2`)
        #[arg(default_value = "latest")]
        task: String,
        /// Use inputs/example.txt (`t`, `true`, `y`, `yes`)
        #[arg(default_value = "false")]
        example: String,
    },
    /// List started tasks
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    setup_logging();

    let cli = Cli::parse();
    let project = cli.project;

    let result: Result<i32, AppError> = match cli.command {
        Commands::New {
            name,
            year,
            language,
            runtime,
            package_manager,
            prettier,
            templates,
            yes,
        } => {
            let answers = new::NewArgs {
                name,
                year,
                language,
                runtime,
                package_manager,
                prettier,
                templates,
                yes,
            };
            new::run_new(project, answers).map(|_| 0)
        }
        Commands::MakeDay { day } => run_make_day(project, &day).map(|_| 0),
        Commands::Run { task, example } => run_task(project, &task, &example),
        Commands::List => run_list(project).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Warnings by default; `RUST_LOG` overrides.
fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

fn project_root(project: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match project {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

fn run_make_day(project: Option<PathBuf>, day: &str) -> Result<(), AppError> {
    let day: Day = day.parse()?;
    let outcome = api::make_day_at(project_root(project)?, day)?;

    for path in &outcome.created {
        println!("✅ Created {}", path.display());
    }
    for path in &outcome.existing {
        println!("  Kept existing {}", path.display());
    }
    match outcome.input {
        InputOutcome::Fetched => println!("✅ Fetched input into {}", outcome.input_path.display()),
        InputOutcome::Kept => println!("  Kept existing {}", outcome.input_path.display()),
        InputOutcome::Placeholder => {
            println!("✅ Created empty {}", outcome.input_path.display())
        }
    }
    Ok(())
}

fn run_task(project: Option<PathBuf>, task: &str, example: &str) -> Result<i32, AppError> {
    let outcome = api::run_at(project_root(project)?, task, parse_example_flag(example))?;
    Ok(outcome.exit_code)
}

fn run_list(project: Option<PathBuf>) -> Result<(), AppError> {
    let tasks = api::list_at(&project_root(project)?)?;
    for task in tasks {
        println!("{}", task);
    }
    Ok(())
}
