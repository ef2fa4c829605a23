use crate::application::formatting;
use crate::domain::curve::{CurveRequest, DEFAULT_NUM_POINTS};
use anyhow::{Context, Result};
use std::ops::RangeInclusive;

/// The four curve parameters the user controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    XShift,
    Steepness,
    XRangeStart,
    XRangeEnd,
}

impl SliderId {
    pub const ALL: [SliderId; 4] = [
        SliderId::XShift,
        SliderId::Steepness,
        SliderId::XRangeStart,
        SliderId::XRangeEnd,
    ];

    /// Element id of the slider in the page layout; value labels use `{id}Value`.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::XShift => "xShift",
            Self::Steepness => "steepness",
            Self::XRangeStart => "xRangeStart",
            Self::XRangeEnd => "xRangeEnd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::XShift => "Shift (x₀)",
            Self::Steepness => "Steepness (k)",
            Self::XRangeStart => "X range start",
            Self::XRangeEnd => "X range end",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Self::XShift => 0.0,
            Self::Steepness => 1.0,
            Self::XRangeStart => -10.0,
            Self::XRangeEnd => 10.0,
        }
    }

    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::XShift => -5.0..=5.0,
            Self::Steepness => 0.1..=10.0,
            Self::XRangeStart => -20.0..=0.0,
            Self::XRangeEnd => 0.0..=20.0,
        }
    }
}

/// Current slider values.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPanel {
    pub x_shift: f64,
    pub steepness: f64,
    pub x_range_start: f64,
    pub x_range_end: f64,
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self {
            x_shift: SliderId::XShift.default_value(),
            steepness: SliderId::Steepness.default_value(),
            x_range_start: SliderId::XRangeStart.default_value(),
            x_range_end: SliderId::XRangeEnd.default_value(),
        }
    }
}

impl SliderPanel {
    pub fn value(&self, id: SliderId) -> f64 {
        match id {
            SliderId::XShift => self.x_shift,
            SliderId::Steepness => self.steepness,
            SliderId::XRangeStart => self.x_range_start,
            SliderId::XRangeEnd => self.x_range_end,
        }
    }

    pub fn value_mut(&mut self, id: SliderId) -> &mut f64 {
        match id {
            SliderId::XShift => &mut self.x_shift,
            SliderId::Steepness => &mut self.steepness,
            SliderId::XRangeStart => &mut self.x_range_start,
            SliderId::XRangeEnd => &mut self.x_range_end,
        }
    }

    /// Parses raw slider text. On failure the previous value is kept.
    pub fn set_from_str(&mut self, id: SliderId, raw: &str) -> Result<()> {
        let parsed: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a number: {:?}", id.element_id(), raw))?;
        *self.value_mut(id) = parsed;
        Ok(())
    }

    /// Text shown next to a slider.
    pub fn value_label(&self, id: SliderId) -> String {
        formatting::fixed(self.value(id), 1)
    }

    /// Builds the request for the current slider state. No range validation happens here.
    pub fn collect(&self) -> CurveRequest {
        CurveRequest {
            x_shift: self.x_shift,
            steepness: self.steepness,
            x_range_start: self.x_range_start,
            x_range_end: self.x_range_end,
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}
