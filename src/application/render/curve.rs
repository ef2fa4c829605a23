use crate::application::formatting::{self, fixed, plain};
use crate::domain::curve::{CurveParameters, CurveResponse};

pub const DEFAULT_CURVE_TITLE: &str = "Sigmoid Function: f(x) = 1 / (1 + e^(-k*(x - x₀)))";

/// Line chart of the sigmoid curve. Lives for the whole session and is updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub series_label: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub y_bounds: [f64; 2],
    pub points: Vec<[f64; 2]>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            title: DEFAULT_CURVE_TITLE.to_string(),
            series_label: "Sigmoid Function".to_string(),
            x_title: "X",
            y_title: "f(X)",
            y_bounds: [0.0, 1.0],
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub x: String,
    pub y: String,
}

/// Subsampled view of a curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryTable {
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Replaces the series and retitles the chart with the parameters the backend used.
///
/// For a fresh calculation these are the slider values; for a replayed saved set they
/// are the saved ones.
pub fn render_curve(chart: &mut LineChart, response: &CurveResponse) {
    chart.points = response.data.iter().map(|s| [s.x, s.y]).collect();
    chart.title = curve_title(response.parameters.steepness, response.parameters.x_shift);
}

pub fn curve_title(steepness: f64, shift: f64) -> String {
    format!(
        "Sigmoid: f(x) = 1 / (1 + e^(-{}*(x - {})))",
        plain(steepness),
        plain(shift)
    )
}

pub fn render_table(response: &CurveResponse) -> SummaryTable {
    let rows = formatting::subsample(&response.data)
        .into_iter()
        .map(|sample| TableRow {
            x: fixed(sample.x, 3),
            y: fixed(sample.y, 6),
        })
        .collect();

    SummaryTable { rows }
}

/// Confirmation line listing the parameters the backend actually used.
pub fn render_parameters_echo(parameters: &CurveParameters) -> String {
    let mut parts = vec![
        format!("x_shift = {}", plain(parameters.x_shift)),
        format!("steepness = {}", plain(parameters.steepness)),
    ];

    if let Some([start, end]) = parameters.x_range {
        parts.push(format!("X range = [{}, {}]", plain(start), plain(end)));
    }
    if let Some(points) = parameters.num_points {
        parts.push(format!("points = {}", points));
    }

    let mut text = format!("Parameters used: {}", parts.join(", "));
    if let Some(id) = parameters.id {
        text.push_str(&format!(" (saved as #{})", id));
    }
    if let Some(created_at) = parameters.created_at {
        text.push_str(&format!(" created {}", created_at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    text
}

/// Hover text for a point on the curve.
pub fn point_tooltip(x: f64, y: f64) -> String {
    format!("f({}) = {}", fixed(x, 2), fixed(y, 4))
}
