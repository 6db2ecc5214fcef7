use crate::domain::AppError;
use crate::ports::{LaunchRequest, TaskLauncher};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<LaunchRequest>>>,
    exit_code: i32,
}

impl RecordingLauncher {
    pub fn new(exit_code: i32) -> Self {
        Self { launched: Arc::new(Mutex::new(vec![])), exit_code }
    }

    pub fn launched(&self) -> Vec<LaunchRequest> {
        self.launched.lock().unwrap().clone()
    }
}

impl TaskLauncher for RecordingLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<i32, AppError> {
        self.launched.lock().unwrap().push(request.clone());
        Ok(self.exit_code)
    }
}
