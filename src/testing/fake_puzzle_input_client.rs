use crate::domain::AppError;
use crate::ports::{PuzzleInputClient, PuzzleInputRequest};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakePuzzleInputClient {
    requests: Arc<Mutex<Vec<PuzzleInputRequest>>>,
    response: Result<String, u16>,
}

impl FakePuzzleInputClient {
    pub fn returning(body: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Ok(body.into()) }
    }

    pub fn failing(status: u16) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Err(status) }
    }

    pub fn requests(&self) -> Vec<PuzzleInputRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PuzzleInputClient for FakePuzzleInputClient {
    fn fetch_input(&self, request: PuzzleInputRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(AppError::PuzzleInputError {
                message: format!("Server responded with code {}", status),
                status: Some(*status),
            }),
        }
    }
}
