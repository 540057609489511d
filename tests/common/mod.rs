//! Shared test doubles for the launcher integration tests.

use std::sync::Mutex;

use app_launcher::{AppError, Application, RunOptions};

/// Application stub that records every `run` invocation instead of binding
/// a listener.
#[derive(Debug, Default)]
pub struct RecordingApp {
    calls: Mutex<Vec<RunOptions>>,
}

impl RecordingApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options received so far, in call order.
    pub fn calls(&self) -> Vec<RunOptions> {
        self.calls.lock().unwrap().clone()
    }
}

impl Application for RecordingApp {
    fn run(&self, options: &RunOptions) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(options.clone());
        Ok(())
    }
}
