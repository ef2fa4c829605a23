use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sample count the collector always requests.
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Range used by the backend when replaying a saved parameter set.
pub const SAVED_CURVE_RANGE: [f64; 2] = [-10.0, 10.0];

/// Parameters sent to `POST /api/calculate/`.
///
/// `x_range_start < x_range_end` is expected but not checked here; the backend is
/// authoritative and reports violations as an API error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRequest {
    pub x_shift: f64,
    pub steepness: f64,
    pub x_range_start: f64,
    pub x_range_end: f64,
    pub num_points: usize,
}

impl Default for CurveRequest {
    fn default() -> Self {
        Self {
            x_shift: 0.0,
            steepness: 1.0,
            x_range_start: -10.0,
            x_range_end: 10.0,
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub x: f64,
    pub y: f64,
}

/// Parameter echo returned alongside the samples.
///
/// The calculate endpoint fills `x_range` and `num_points`; the saved-curve replay
/// endpoint fills `created_at` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub x_shift: f64,
    pub steepness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_range: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_points: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CurveParameters {
    pub fn echo(request: &CurveRequest, id: Option<u64>) -> Self {
        Self {
            id,
            x_shift: request.x_shift,
            steepness: request.steepness,
            x_range: Some([request.x_range_start, request.x_range_end]),
            num_points: Some(request.num_points),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveResponse {
    pub data: Vec<CurveSample>,
    pub parameters: CurveParameters,
}

/// A parameter set persisted by the backend (`GET /api/parameters/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedParameters {
    pub id: u64,
    pub x_shift: f64,
    pub steepness: f64,
    pub created_at: DateTime<Utc>,
}

/// f(x) = 1 / (1 + e^(-k(x - x0)))
pub fn sigmoid(x: f64, steepness: f64, shift: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (x - shift)).exp())
}

/// Evenly spaced values over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Samples the sigmoid described by `request`.
pub fn sample_curve(request: &CurveRequest) -> Vec<CurveSample> {
    linspace(request.x_range_start, request.x_range_end, request.num_points)
        .into_iter()
        .map(|x| CurveSample {
            x,
            y: sigmoid(x, request.steepness, request.x_shift),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint_is_half() {
        assert!((sigmoid(0.0, 1.0, 0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(2.5, 4.0, 2.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_includes_endpoints() {
        let xs = linspace(-5.0, 5.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[99], 5.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_parameters_echo_deserializes_without_optional_fields() {
        let json = r#"{"id": 4, "x_shift": 1.5, "steepness": 2.0,
                       "created_at": "2025-03-01T10:00:00Z"}"#;
        let params: CurveParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.id, Some(4));
        assert!(params.x_range.is_none());
        assert!(params.num_points.is_none());
        assert!(params.created_at.is_some());
    }

    #[test]
    fn test_request_uses_backend_field_names() {
        let value = serde_json::to_value(CurveRequest::default()).unwrap();
        assert_eq!(value["x_range_start"], -10.0);
        assert_eq!(value["num_points"], 100);
    }
}
