use crate::config::{Config, Mode};
use crate::domain::ports::SigmoidService;
use crate::infrastructure::mock::MockSigmoidService;
use crate::infrastructure::sigmoid_api::HttpSigmoidService;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_service(config: &Config) -> Arc<dyn SigmoidService> {
        match config.mode {
            Mode::Mock => {
                info!("Using in-process mock sigmoid service");
                Arc::new(MockSigmoidService::new())
            }
            Mode::Http => {
                info!("Using sigmoid backend at {}", config.api.base_url);
                Arc::new(HttpSigmoidService::from_config(&config.api))
            }
        }
    }
}
