use crate::domain::ports::LoadingIndicator;
use tracing::{debug, info};

/// Loading indicator that only writes to the log. Default for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLoadingIndicator;

impl LoadingIndicator for TracingLoadingIndicator {
    fn show(&self, message: &str) {
        info!("{}", message);
    }

    fn hide(&self) {
        debug!("Loading finished");
    }
}
