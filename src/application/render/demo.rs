use crate::application::formatting::{percentage, plain};
use crate::domain::demo::{ClassLabel, ClassifiedSample, DemoDataset};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub class: ClassLabel,
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Scatter chart with fixed axis bounds. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn series_for(&self, class: ClassLabel) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.class == class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub accuracy: String,
    pub decision_boundary: String,
    pub steepness: String,
    pub explanation: String,
}

impl DemoSummary {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Accuracy: {}", self.accuracy),
            format!("Decision boundary: r = {}", self.decision_boundary),
            format!("Sigmoid steepness: {}", self.steepness),
            format!("Explanation: {}", self.explanation),
        ]
    }
}

fn partitioned_series(
    dataset: &DemoDataset,
    project: impl Fn(&ClassifiedSample) -> [f64; 2],
) -> Vec<ScatterSeries> {
    let groups = dataset.partition();
    ClassLabel::ALL
        .into_iter()
        .map(|class| ScatterSeries {
            class,
            label: class.to_string(),
            points: groups[class.index()].iter().map(|s| project(*s)).collect(),
        })
        .collect()
}

fn replace<'a>(slot: &'a mut Option<ScatterChart>, chart: ScatterChart) -> &'a ScatterChart {
    if let Some(old) = slot.take() {
        debug!("Disposing scatter chart '{}'", old.title);
    }
    slot.insert(chart)
}

/// The raw 2-D point cloud, coloured by class.
pub fn render_original_chart<'a>(
    slot: &'a mut Option<ScatterChart>,
    dataset: &DemoDataset,
) -> &'a ScatterChart {
    let chart = ScatterChart {
        title: "Original Data - Not Linearly Separable",
        x_title: "X₁",
        y_title: "X₂",
        x_bounds: [-6.0, 6.0],
        y_bounds: [-6.0, 6.0],
        series: partitioned_series(dataset, |s| [s.point.x1, s.point.x2]),
    };
    replace(slot, chart)
}

/// The same samples after the radial transform, plotted against the sigmoid probability.
///
/// The decision boundary is reported in the log only; it is not drawn on the chart.
pub fn render_transformation_chart<'a>(
    slot: &'a mut Option<ScatterChart>,
    dataset: &DemoDataset,
) -> &'a ScatterChart {
    let chart = ScatterChart {
        title: "Radial Transform + Sigmoid",
        x_title: "Radius r = √(x₁² + x₂²)",
        y_title: "Probability of Class 1",
        x_bounds: [0.0, 8.0],
        y_bounds: [0.0, 1.0],
        series: partitioned_series(dataset, |s| {
            [s.prediction.radius, s.prediction.probability]
        }),
    };
    info!("Decision boundary at r = {}", dataset.decision_boundary);
    replace(slot, chart)
}

pub fn render_demo_summary(dataset: &DemoDataset) -> DemoSummary {
    DemoSummary {
        accuracy: percentage(dataset.accuracy),
        decision_boundary: plain(dataset.decision_boundary),
        steepness: plain(dataset.steepness),
        explanation: dataset.explanation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo::{DemoPoint, DemoResponse, PredictionPoint};

    fn dataset() -> DemoDataset {
        let raw = [
            (2.0, 0.0, ClassLabel::Inner, 0.05),
            (0.0, -5.0, ClassLabel::Outer, 0.95),
            (-1.0, 1.5, ClassLabel::Inner, 0.02),
            (3.5, 3.5, ClassLabel::Outer, 0.99),
            (3.3, 0.0, ClassLabel::Inner, 0.40),
        ];
        DemoResponse {
            original_data: raw
                .iter()
                .map(|&(x1, x2, class, _)| DemoPoint {
                    x1,
                    x2,
                    class,
                    radius: None,
                })
                .collect(),
            predictions: raw
                .iter()
                .map(|&(x1, x2, _, probability)| PredictionPoint {
                    radius: f64::hypot(x1, x2),
                    probability,
                    predicted_class: None,
                })
                .collect(),
            accuracy: 0.873,
            decision_boundary: 3.5,
            steepness: 2.0,
            explanation: "ring data".to_string(),
        }
        .into_dataset()
        .unwrap()
    }

    #[test]
    fn test_original_chart_partitions_by_class() {
        let data = dataset();
        let mut slot = None;
        let chart = render_original_chart(&mut slot, &data);

        assert_eq!(chart.point_count(), data.samples.len());
        assert_eq!(chart.series_for(ClassLabel::Inner).unwrap().points.len(), 3);
        assert_eq!(chart.series_for(ClassLabel::Outer).unwrap().points.len(), 2);
        assert_eq!(chart.x_bounds, [-6.0, 6.0]);
        assert_eq!(chart.y_bounds, [-6.0, 6.0]);
    }

    #[test]
    fn test_transformation_chart_uses_same_index_set() {
        let data = dataset();
        let mut original = None;
        let mut transformed = None;
        render_original_chart(&mut original, &data);
        render_transformation_chart(&mut transformed, &data);

        let original = original.unwrap();
        let transformed = transformed.unwrap();
        for class in ClassLabel::ALL {
            let xs = &original.series_for(class).unwrap().points;
            let rs = &transformed.series_for(class).unwrap().points;
            assert_eq!(xs.len(), rs.len());
            for (p, r) in xs.iter().zip(rs) {
                assert!((f64::hypot(p[0], p[1]) - r[0]).abs() < 1e-12);
            }
        }
        assert_eq!(transformed.x_bounds, [0.0, 8.0]);
        assert_eq!(transformed.y_bounds, [0.0, 1.0]);
    }

    #[test]
    fn test_charts_are_rebuilt() {
        let data = dataset();
        let mut slot = Some(ScatterChart {
            title: "stale",
            x_title: "",
            y_title: "",
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            series: Vec::new(),
        });

        render_original_chart(&mut slot, &data);
        assert_eq!(slot.unwrap().series.len(), 2);
    }

    #[test]
    fn test_summary_formats_accuracy() {
        let summary = render_demo_summary(&dataset());
        assert_eq!(summary.accuracy, "87.3%");
        assert_eq!(summary.decision_boundary, "3.5");
        assert_eq!(summary.steepness, "2");
        assert!(summary.lines()[0].contains("87.3%"));
    }
}
