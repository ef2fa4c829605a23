use crate::domain::curve::{
    CurveParameters, CurveRequest, CurveResponse, SAVED_CURVE_RANGE, SavedParameters,
    sample_curve, sigmoid,
};
use crate::domain::demo::{
    ClassLabel, DemoPoint, DemoResponse, PredictionPoint, radial_transform,
};
use crate::domain::errors::ServiceError;
use crate::domain::ports::SigmoidService;
use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

const DEMO_SEED: u64 = 42;
const DEMO_POINTS: usize = 200;
const INNER_RADIUS: f64 = 2.0;
const OUTER_RADIUS: f64 = 5.0;
const RADIUS_NOISE: f64 = 0.3;
const DEMO_DECISION_BOUNDARY: f64 = 3.5;
const DEMO_STEEPNESS: f64 = 2.0;

/// In-process stand-in for the sigmoid backend.
///
/// Curves are computed locally and every calculated parameter set is remembered, so
/// history and replay behave like the real service.
#[derive(Clone, Default)]
pub struct MockSigmoidService {
    saved: Arc<RwLock<Vec<SavedParameters>>>,
    failure: Option<ServiceError>,
}

impl MockSigmoidService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self {
            saved: Arc::default(),
            failure: Some(error),
        }
    }

    fn check_failure(&self) -> Result<(), ServiceError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn bad_request(message: impl Into<String>) -> ServiceError {
    ServiceError::Api {
        status: 400,
        message: message.into(),
    }
}

fn validate(request: &CurveRequest) -> Result<(), ServiceError> {
    let fields = [
        ("x_shift", request.x_shift),
        ("steepness", request.steepness),
        ("x_range_start", request.x_range_start),
        ("x_range_end", request.x_range_end),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(bad_request(format!("{} must be a finite number", name)));
        }
    }
    Ok(())
}

fn ring(
    rng: &mut StdRng,
    noise: &Normal<f64>,
    radius: f64,
    class: ClassLabel,
    count: usize,
) -> Vec<DemoPoint> {
    (0..count)
        .map(|_| {
            let theta = rng.random_range(0.0..TAU);
            let r = radius + noise.sample(rng);
            let (x1, x2) = (r * theta.cos(), r * theta.sin());
            DemoPoint {
                x1,
                x2,
                class,
                radius: Some(radial_transform(x1, x2)),
            }
        })
        .collect()
}

/// Two noisy concentric rings classified by a sigmoid on the radius.
pub fn generate_demo(seed: u64) -> Result<DemoResponse, ServiceError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, RADIUS_NOISE).map_err(|e| ServiceError::Api {
        status: 500,
        message: format!("Invalid demo noise: {}", e),
    })?;
    let half = DEMO_POINTS / 2;

    let mut original_data = ring(&mut rng, &noise, INNER_RADIUS, ClassLabel::Inner, half);
    original_data.extend(ring(&mut rng, &noise, OUTER_RADIUS, ClassLabel::Outer, half));

    let predictions: Vec<PredictionPoint> = original_data
        .iter()
        .map(|point| {
            let radius = radial_transform(point.x1, point.x2);
            let probability = sigmoid(radius, DEMO_STEEPNESS, DEMO_DECISION_BOUNDARY);
            PredictionPoint {
                radius,
                probability,
                predicted_class: Some(ClassLabel::from_probability(probability)),
            }
        })
        .collect();

    let correct = original_data
        .iter()
        .zip(&predictions)
        .filter(|(point, prediction)| prediction.predicted_class == Some(point.class))
        .count();

    Ok(DemoResponse {
        accuracy: correct as f64 / original_data.len() as f64,
        decision_boundary: DEMO_DECISION_BOUNDARY,
        steepness: DEMO_STEEPNESS,
        explanation: "Non-linear separability demo using a radial transform and a sigmoid function"
            .to_string(),
        original_data,
        predictions,
    })
}

#[async_trait]
impl SigmoidService for MockSigmoidService {
    async fn compute_curve(&self, request: &CurveRequest) -> Result<CurveResponse, ServiceError> {
        self.check_failure()?;
        validate(request)?;

        let mut saved = self.saved.write().await;
        let id = saved.len() as u64 + 1;
        saved.push(SavedParameters {
            id,
            x_shift: request.x_shift,
            steepness: request.steepness,
            created_at: Utc::now(),
        });
        info!("MockSigmoidService: computed {} samples (set #{})", request.num_points, id);

        Ok(CurveResponse {
            data: sample_curve(request),
            parameters: CurveParameters::echo(request, Some(id)),
        })
    }

    async fn fetch_demo(&self) -> Result<DemoResponse, ServiceError> {
        self.check_failure()?;
        generate_demo(DEMO_SEED)
    }

    async fn list_saved_parameters(&self) -> Result<Vec<SavedParameters>, ServiceError> {
        self.check_failure()?;
        let mut list = self.saved.read().await.clone();
        list.reverse();
        Ok(list)
    }

    async fn fetch_saved_curve(&self, id: u64) -> Result<CurveResponse, ServiceError> {
        self.check_failure()?;
        let saved = self.saved.read().await;
        let params = saved
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::Api {
                status: 404,
                message: "Parameters not found".to_string(),
            })?;

        let request = CurveRequest {
            x_shift: params.x_shift,
            steepness: params.steepness,
            x_range_start: SAVED_CURVE_RANGE[0],
            x_range_end: SAVED_CURVE_RANGE[1],
            ..CurveRequest::default()
        };

        Ok(CurveResponse {
            data: sample_curve(&request),
            parameters: CurveParameters {
                id: Some(params.id),
                x_shift: params.x_shift,
                steepness: params.steepness,
                x_range: None,
                num_points: None,
                created_at: Some(params.created_at),
            },
        })
    }
}
