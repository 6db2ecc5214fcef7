mod puzzle_input_client;
mod task_launcher;

pub use puzzle_input_client::{PuzzleInputClient, PuzzleInputRequest};
pub use task_launcher::{LaunchRequest, TaskLauncher};
