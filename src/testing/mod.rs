mod fake_puzzle_input_client;
mod recording_launcher;

pub use fake_puzzle_input_client::FakePuzzleInputClient;
pub use recording_launcher::RecordingLauncher;
