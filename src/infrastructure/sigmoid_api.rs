//! HTTP client for the sigmoid backend.

use crate::config::ApiEnvConfig;
use crate::domain::curve::{CurveRequest, CurveResponse, SavedParameters};
use crate::domain::demo::DemoResponse;
use crate::domain::errors::ServiceError;
use crate::domain::ports::SigmoidService;
use crate::infrastructure::core::HttpClientFactory;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

const CALCULATE_PATH: &str = "api/calculate/";
const DEMO_PATH: &str = "api/demo/nonlinear-separability/";
const PARAMETERS_PATH: &str = "api/parameters/";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpSigmoidService {
    client: Client,
    base_url: Url,
}

impl HttpSigmoidService {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &ApiEnvConfig) -> Self {
        Self::new(
            HttpClientFactory::create_client(config),
            config.base_url.clone(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Transport(format!("invalid endpoint {}: {}", path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
    let status = response.status();
    let body = response.bytes().await?;
    decode_body(status, &body)
}

/// Maps a status code and raw body onto the typed result.
///
/// Error bodies are expected to be `{"error": "..."}`; anything else on a failing
/// status is still an API error, described by the status line.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, ServiceError> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(|e| ServiceError::Decode(e.to_string()));
    }

    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("HTTP {}", status),
    };
    Err(ServiceError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SigmoidService for HttpSigmoidService {
    async fn compute_curve(&self, request: &CurveRequest) -> Result<CurveResponse, ServiceError> {
        let url = self.endpoint(CALCULATE_PATH)?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        let curve: CurveResponse = decode(response).await?;
        info!(
            "Backend returned {} samples (parameter set {:?})",
            curve.data.len(),
            curve.parameters.id
        );
        Ok(curve)
    }

    async fn fetch_demo(&self) -> Result<DemoResponse, ServiceError> {
        self.get(DEMO_PATH).await
    }

    async fn list_saved_parameters(&self) -> Result<Vec<SavedParameters>, ServiceError> {
        self.get(PARAMETERS_PATH).await
    }

    async fn fetch_saved_curve(&self, id: u64) -> Result<CurveResponse, ServiceError> {
        self.get(&format!("api/data/{}/", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;

    #[test]
    fn test_decode_success_body() {
        let body = br#"{
            "parameters": {"id": 3, "x_shift": 0.0, "steepness": 1.0,
                           "x_range": [-5.0, 5.0], "num_points": 2},
            "data": [{"x": -5.0, "y": 0.0066}, {"x": 5.0, "y": 0.9933}]
        }"#;

        let curve: CurveResponse = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(curve.data.len(), 2);
        assert_eq!(curve.parameters.x_range, Some([-5.0, 5.0]));
        assert_eq!(curve.parameters.id, Some(3));
    }

    #[test]
    fn test_decode_error_body() {
        let err = decode_body::<CurveResponse>(
            StatusCode::BAD_REQUEST,
            br#"{"error": "bad range"}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Api {
                status: 400,
                message: "bad range".to_string()
            }
        );
    }

    #[test]
    fn test_decode_non_json_error_body() {
        let err = decode_body::<CurveResponse>(StatusCode::BAD_GATEWAY, b"<html>oops</html>")
            .unwrap_err();

        match err {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_body::<DemoResponse>(StatusCode::OK, br#"{"accuracy": 1.0}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[test]
    fn test_decode_saved_parameters_list() {
        let body = br#"[
            {"id": 2, "x_shift": 1.0, "steepness": 3.0, "created_at": "2025-05-02T08:30:00Z"},
            {"id": 1, "x_shift": 0.0, "steepness": 1.0, "created_at": "2025-05-01T08:30:00.123456Z"}
        ]"#;

        let list: Vec<SavedParameters> = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 2);
    }

    #[test]
    fn test_endpoints_resolve_under_base_path() {
        let service = HttpSigmoidService::new(
            Client::new(),
            parse_base_url("http://localhost:8000/sigmoid").unwrap(),
        );

        assert_eq!(
            service.endpoint(DEMO_PATH).unwrap().as_str(),
            "http://localhost:8000/sigmoid/api/demo/nonlinear-separability/"
        );
        assert_eq!(
            service.endpoint("api/data/7/").unwrap().as_str(),
            "http://localhost:8000/sigmoid/api/data/7/"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let service = HttpSigmoidService::new(
            Client::new(),
            parse_base_url("http://127.0.0.1:9").unwrap(),
        );

        let err = service.fetch_demo().await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }
}
