use crate::config::ApiEnvConfig;
use reqwest::Client;
use tracing::warn;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for backend calls.
    ///
    /// No retry layer. Timeouts are only set when configured.
    pub fn create_client(config: &ApiEnvConfig) -> Client {
        let mut builder = Client::builder().pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder.build().unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
    }
}
