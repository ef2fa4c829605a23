#![allow(dead_code)]

use async_trait::async_trait;
use sigmoid_explorer::domain::curve::{CurveRequest, CurveResponse, SavedParameters};
use sigmoid_explorer::domain::demo::DemoResponse;
use sigmoid_explorer::domain::errors::ServiceError;
use sigmoid_explorer::domain::ports::{LoadingIndicator, SigmoidService};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out pre-recorded responses in order. Runs out with a transport error.
#[derive(Default)]
pub struct ScriptedService {
    curves: Mutex<VecDeque<Result<CurveResponse, ServiceError>>>,
    demos: Mutex<VecDeque<Result<DemoResponse, ServiceError>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curve(self, result: Result<CurveResponse, ServiceError>) -> Self {
        self.curves.lock().unwrap().push_back(result);
        self
    }

    pub fn with_demo(self, result: Result<DemoResponse, ServiceError>) -> Self {
        self.demos.lock().unwrap().push_back(result);
        self
    }
}

fn exhausted() -> ServiceError {
    ServiceError::Transport("script exhausted".to_string())
}

#[async_trait]
impl SigmoidService for ScriptedService {
    async fn compute_curve(&self, _request: &CurveRequest) -> Result<CurveResponse, ServiceError> {
        self.curves.lock().unwrap().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn fetch_demo(&self) -> Result<DemoResponse, ServiceError> {
        self.demos.lock().unwrap().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn list_saved_parameters(&self) -> Result<Vec<SavedParameters>, ServiceError> {
        Ok(Vec::new())
    }

    async fn fetch_saved_curve(&self, _id: u64) -> Result<CurveResponse, ServiceError> {
        Err(exhausted())
    }
}

/// Records every show/hide call.
#[derive(Default)]
pub struct RecordingIndicator {
    events: Mutex<Vec<String>>,
}

impl RecordingIndicator {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_balanced(&self) -> bool {
        let events = self.events();
        let shows = events.iter().filter(|e| e.starts_with("show")).count();
        let hides = events.iter().filter(|e| *e == "hide").count();
        shows == hides
    }
}

impl LoadingIndicator for RecordingIndicator {
    fn show(&self, message: &str) {
        self.events.lock().unwrap().push(format!("show:{}", message));
    }

    fn hide(&self) {
        self.events.lock().unwrap().push("hide".to_string());
    }
}

pub fn bad_range() -> ServiceError {
    ServiceError::Api {
        status: 400,
        message: "bad range".to_string(),
    }
}
