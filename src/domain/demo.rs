use crate::domain::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary label of a demo point. The wire format is the integer 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ClassLabel {
    /// Points on the inner ring.
    Inner,
    /// Points on the outer ring.
    Outer,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Inner, ClassLabel::Outer];

    pub fn index(self) -> usize {
        match self {
            Self::Inner => 0,
            Self::Outer => 1,
        }
    }

    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Self::Outer
        } else {
            Self::Inner
        }
    }
}

impl TryFrom<u8> for ClassLabel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Inner),
            1 => Ok(Self::Outer),
            other => Err(format!("class label must be 0 or 1, got {}", other)),
        }
    }
}

impl From<ClassLabel> for u8 {
    fn from(label: ClassLabel) -> Self {
        label.index() as u8
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => write!(f, "Class 0 (Inner)"),
            Self::Outer => write!(f, "Class 1 (Outer)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemoPoint {
    pub x1: f64,
    pub x2: f64,
    pub class: ClassLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub radius: f64,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<ClassLabel>,
}

/// Payload of `GET /api/demo/nonlinear-separability/`.
///
/// `predictions[i]` belongs to `original_data[i]`; use [`DemoResponse::into_dataset`]
/// to pair them before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub original_data: Vec<DemoPoint>,
    pub predictions: Vec<PredictionPoint>,
    pub accuracy: f64,
    pub decision_boundary: f64,
    pub steepness: f64,
    pub explanation: String,
}

/// A demo point together with the prediction computed for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSample {
    pub point: DemoPoint,
    pub prediction: PredictionPoint,
}

impl ClassifiedSample {
    pub fn class(&self) -> ClassLabel {
        self.point.class
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataset {
    pub samples: Vec<ClassifiedSample>,
    pub accuracy: f64,
    pub decision_boundary: f64,
    pub steepness: f64,
    pub explanation: String,
}

impl DemoResponse {
    pub fn into_dataset(self) -> Result<DemoDataset, ServiceError> {
        if self.original_data.len() != self.predictions.len() {
            return Err(ServiceError::Misaligned {
                points: self.original_data.len(),
                predictions: self.predictions.len(),
            });
        }

        let samples = self
            .original_data
            .into_iter()
            .zip(self.predictions)
            .map(|(point, prediction)| ClassifiedSample { point, prediction })
            .collect();

        Ok(DemoDataset {
            samples,
            accuracy: self.accuracy,
            decision_boundary: self.decision_boundary,
            steepness: self.steepness,
            explanation: self.explanation,
        })
    }
}

impl DemoDataset {
    /// Splits samples by their true class, preserving order inside each group.
    pub fn partition(&self) -> [Vec<&ClassifiedSample>; 2] {
        let mut groups: [Vec<&ClassifiedSample>; 2] = [Vec::new(), Vec::new()];
        for sample in &self.samples {
            groups[sample.class().index()].push(sample);
        }
        groups
    }
}

/// r = sqrt(x1^2 + x2^2)
pub fn radial_transform(x1: f64, x2: f64) -> f64 {
    x1.hypot(x2)
}
