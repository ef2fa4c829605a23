use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Titled container used for the results line and the demo summary.
pub fn render_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(title)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY)
                .strong(),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);
        add_contents(ui)
    })
}

/// `label: value` line with the label de-emphasized.
pub fn render_field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong().color(DesignSystem::TEXT_SECONDARY));
        ui.label(egui::RichText::new(value).color(DesignSystem::TEXT_PRIMARY));
    });
}
