use crate::config::{Config, Mode};
use std::collections::HashMap;
use std::time::Duration;

fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(&|key| map.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.mode, Mode::Http);
    assert_eq!(config.api.base_url.as_str(), "http://127.0.0.1:8000/");
    assert!(config.api.request_timeout.is_none());
    assert!(config.api.connect_timeout.is_none());
    assert_eq!(config.api.pool_max_idle_per_host, 5);
    assert_eq!(config.ui.window_width, 1200.0);
    assert_eq!(config.ui.window_height, 800.0);
}

#[test]
fn test_config_mock_mode_case_insensitive() {
    let config = load(&[("MODE", "MOCK")]).unwrap();
    assert_eq!(config.mode, Mode::Mock);
}

#[test]
fn test_config_invalid_mode() {
    let err = load(&[("MODE", "grpc")]).unwrap_err();
    assert!(err.to_string().contains("Invalid MODE"));
}

#[test]
fn test_config_explicit_timeouts() {
    let config = load(&[
        ("SIGMOID_API_BASE_URL", "https://sigmoid.example.org/api-root"),
        ("SIGMOID_REQUEST_TIMEOUT_SECS", "15"),
        ("SIGMOID_CONNECT_TIMEOUT_SECS", " 3 "),
    ])
    .unwrap();

    assert_eq!(
        config.api.base_url.as_str(),
        "https://sigmoid.example.org/api-root/"
    );
    assert_eq!(config.api.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.api.connect_timeout, Some(Duration::from_secs(3)));
}

#[test]
fn test_config_rejects_non_numeric_timeout() {
    let err = load(&[("SIGMOID_REQUEST_TIMEOUT_SECS", "soon")]).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("SIGMOID_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn test_config_window_size() {
    let config = load(&[
        ("SIGMOID_WINDOW_WIDTH", "1600"),
        ("SIGMOID_WINDOW_HEIGHT", "900.5"),
    ])
    .unwrap();
    assert_eq!(config.ui.window_width, 1600.0);
    assert_eq!(config.ui.window_height, 900.5);
}
