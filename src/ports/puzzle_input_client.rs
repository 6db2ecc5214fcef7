//! Remote puzzle input port definition.

use crate::domain::{AppError, Day};

/// Identifies one day's personal puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInputRequest {
    pub year: u16,
    pub day: Day,
}

/// Port for fetching puzzle input from the remote puzzle site.
///
/// Implementations perform a single attempt; callers decide what to do on failure.
pub trait PuzzleInputClient {
    /// Fetch the raw input text for a day.
    fn fetch_input(&self, request: PuzzleInputRequest) -> Result<String, AppError>;
}
