use crate::application::render::curve::point_tooltip;
use crate::application::render::{LineChart, ScatterChart};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

pub fn render_line_chart(ui: &mut egui::Ui, chart: &LineChart, height: f32) {
    ui.label(egui::RichText::new(&chart.title).strong().size(15.0));

    let [y_min, y_max] = chart.y_bounds;
    Plot::new("sigmoid_curve_plot")
        .height(height)
        .show_grid([true, true])
        .legend(Legend::default())
        .x_axis_label(chart.x_title)
        .y_axis_label(chart.y_title)
        .include_y(y_min)
        .include_y(y_max)
        .label_formatter(|_name, value| point_tooltip(value.x, value.y))
        .show(ui, |plot_ui| {
            if !chart.points.is_empty() {
                plot_ui.line(
                    Line::new(
                        chart.series_label.clone(),
                        PlotPoints::from(chart.points.clone()),
                    )
                    .color(DesignSystem::CURVE)
                    .width(DesignSystem::CURVE_WIDTH),
                );
            }
        });
}

pub fn render_scatter_chart(ui: &mut egui::Ui, id: &str, chart: &ScatterChart, height: f32) {
    ui.label(egui::RichText::new(chart.title).strong().size(15.0));

    let [x_min, x_max] = chart.x_bounds;
    let [y_min, y_max] = chart.y_bounds;
    Plot::new(id)
        .height(height)
        .show_grid([true, true])
        .legend(Legend::default())
        .x_axis_label(chart.x_title)
        .y_axis_label(chart.y_title)
        .include_x(x_min)
        .include_x(x_max)
        .include_y(y_min)
        .include_y(y_max)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                plot_ui.points(
                    Points::new(series.label.clone(), PlotPoints::from(series.points.clone()))
                        .color(DesignSystem::class_color(series.class))
                        .radius(DesignSystem::POINT_RADIUS),
                );
            }
        });
}
