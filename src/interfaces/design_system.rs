use crate::domain::demo::ClassLabel;
use eframe::egui::{self, Color32};

/// Light theme built around the chart colours of the web client.
pub struct DesignSystem;

impl DesignSystem {
    // Surfaces
    pub const PAGE: Color32 = Color32::from_rgb(245, 247, 250);
    pub const SURFACE: Color32 = Color32::WHITE;
    pub const OUTLINE: Color32 = Color32::from_rgb(214, 219, 225);

    // Chart series (#3498DB and #E74C3C, points at 70% opacity)
    pub const CURVE: Color32 = Color32::from_rgb(52, 152, 219);
    pub const CLASS_INNER: Color32 = Color32::from_rgba_premultiplied(162, 53, 42, 178);
    pub const CLASS_OUTER: Color32 = Color32::from_rgba_premultiplied(36, 106, 153, 178);

    pub const DANGER: Color32 = Color32::from_rgb(192, 57, 43);

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 37, 41);
    pub const TEXT_SECONDARY: Color32 = Color32::from_gray(90);
    pub const TEXT_MUTED: Color32 = Color32::from_gray(140);

    pub const CARD_RADIUS: u8 = 6;
    pub const SPACING_SMALL: f32 = 6.0;
    pub const SPACING_MEDIUM: f32 = 14.0;
    pub const POINT_RADIUS: f32 = 4.0;
    pub const CURVE_WIDTH: f32 = 3.0;

    /// Scatter colour for a true class label.
    pub fn class_color(class: ClassLabel) -> Color32 {
        match class {
            ClassLabel::Inner => Self::CLASS_INNER,
            ClassLabel::Outer => Self::CLASS_OUTER,
        }
    }

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Self::PAGE;
        visuals.window_fill = Self::SURFACE;
        visuals.override_text_color = Some(Self::TEXT_PRIMARY);
        visuals.selection.bg_fill = Self::CURVE.gamma_multiply(0.25);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::CURVE);
        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::group(&egui::Style::default())
            .fill(Self::SURFACE)
            .stroke(egui::Stroke::new(1.0, Self::OUTLINE))
            .corner_radius(Self::CARD_RADIUS)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }
}
