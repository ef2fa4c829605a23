//! Backend API configuration parsing from environment variables.

use super::{EnvLookup, parse_optional};
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Sigmoid backend configuration
#[derive(Debug, Clone)]
pub struct ApiEnvConfig {
    pub base_url: Url,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
}

impl Default for ApiEnvConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base url is valid"),
            request_timeout: None,
            connect_timeout: None,
            pool_max_idle_per_host: 5,
        }
    }
}

impl ApiEnvConfig {
    pub fn from_vars(lookup: EnvLookup<'_>) -> Result<Self> {
        let base_url = match lookup("SIGMOID_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => Self::default().base_url,
        };

        let request_timeout = parse_optional::<u64>(lookup, "SIGMOID_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs);
        let connect_timeout = parse_optional::<u64>(lookup, "SIGMOID_CONNECT_TIMEOUT_SECS")?
            .map(Duration::from_secs);
        let pool_max_idle_per_host =
            parse_optional::<usize>(lookup, "SIGMOID_POOL_MAX_IDLE_PER_HOST")?.unwrap_or(5);

        Ok(Self {
            base_url,
            request_timeout,
            connect_timeout,
            pool_max_idle_per_host,
        })
    }
}

/// Parses a base URL and makes sure it ends with `/`, so relative endpoint paths
/// are appended rather than replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized)
        .with_context(|| format!("Invalid SIGMOID_API_BASE_URL: {}", raw))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("SIGMOID_API_BASE_URL cannot be used as a base: {}", raw);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:8000/teaching").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/teaching/");
        assert_eq!(
            url.join("api/calculate/").unwrap().as_str(),
            "http://localhost:8000/teaching/api/calculate/"
        );
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
    }
}
