//! Puzzle input client implementation using reqwest.

use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use url::Url;

use crate::domain::{AppError, PuzzleInputConfig};
use crate::ports::{PuzzleInputClient, PuzzleInputRequest};

/// Environment variable holding the puzzle site session cookie.
pub const SESSION_ENV: &str = "AOC_SESSION";

/// HTTP transport for the puzzle site.
///
/// One request per call, no retries.
#[derive(Clone)]
pub struct HttpPuzzleInputClient {
    session: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpPuzzleInputClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPuzzleInputClient")
            .field("base_url", &self.base_url)
            .field("session", &"[REDACTED]")
            .finish()
    }
}

impl HttpPuzzleInputClient {
    /// Create a new HTTP client with the given session cookie and configuration.
    pub fn new(session: String, config: &PuzzleInputConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("advent-scaffold/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::PuzzleInputError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { session, base_url: config.base_url.clone(), client })
    }

    fn input_url(&self, request: PuzzleInputRequest) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidConfig(format!("Not a base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend([request.year.to_string(), "day".to_string(), request.day.to_string()])
            .push("input");
        Ok(url)
    }
}

impl PuzzleInputClient for HttpPuzzleInputClient {
    fn fetch_input(&self, request: PuzzleInputRequest) -> Result<String, AppError> {
        let url = self.input_url(request)?;
        info!("Fetching input for day {} year {}", request.day, request.year);

        let response = self
            .client
            .get(url)
            .header(COOKIE, format!("session={}", self.session))
            .send()
            .map_err(|e| AppError::PuzzleInputError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = if body.trim().is_empty() { "no response body" } else { body.trim() };
            return Err(AppError::PuzzleInputError {
                message: format!("Server responded with code {}: {}", status.as_u16(), detail),
                status: Some(status.as_u16()),
            });
        }

        response.text().map_err(|e| AppError::PuzzleInputError {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })
    }
}
