use crate::application::render::SummaryTable;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_summary_table(ui: &mut egui::Ui, table: &SummaryTable) {
    if table.is_empty() {
        ui.label(
            egui::RichText::new("No samples yet.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("summary_table_scroll")
        .max_height(420.0)
        .show(ui, |ui| {
            egui::Grid::new("summary_table_grid")
                .striped(true)
                .min_col_width(90.0)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("x");
                    ui.strong("f(x)");
                    ui.end_row();

                    for row in &table.rows {
                        ui.monospace(&row.x);
                        ui.monospace(&row.y);
                        ui.end_row();
                    }
                });
        });
}
