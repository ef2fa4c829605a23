use crate::domain::curve::{CurveRequest, CurveResponse, SavedParameters};
use crate::domain::demo::DemoResponse;
use crate::domain::errors::ServiceError;
use async_trait::async_trait;

// Need async_trait for async functions in dyn-compatible traits
#[async_trait]
pub trait SigmoidService: Send + Sync {
    /// One call, no retry.
    async fn compute_curve(&self, request: &CurveRequest) -> Result<CurveResponse, ServiceError>;
    async fn fetch_demo(&self) -> Result<DemoResponse, ServiceError>;
    async fn list_saved_parameters(&self) -> Result<Vec<SavedParameters>, ServiceError>;
    async fn fetch_saved_curve(&self, id: u64) -> Result<CurveResponse, ServiceError>;
}

/// Busy indication around a service call.
pub trait LoadingIndicator: Send + Sync {
    fn show(&self, message: &str);
    fn hide(&self);
}
