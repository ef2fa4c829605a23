use crate::application::client::{ExplorerClient, ExplorerCommand, ExplorerEvent};
use crate::application::collector::SliderId;
use crate::application::explorer::{Applied, ExplorerView};
use crate::application::loading::SharedBusyFlag;
use crate::interfaces::components::card::{render_card, render_field};
use crate::interfaces::components::charts::{render_line_chart, render_scatter_chart};
use crate::interfaces::components::table::render_summary_table;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::sync::Arc;
use tracing::{debug, error};

const MAX_LOG_LINES: usize = 500;

pub struct ExplorerApp {
    client: ExplorerClient,
    view: ExplorerView,
    busy: Arc<SharedBusyFlag>,
    logs: Vec<String>,
    saved_id_input: String,
}

impl ExplorerApp {
    /// Creates the app and asks for the initial curve, as the page did on load.
    pub fn new(client: ExplorerClient, view: ExplorerView, busy: Arc<SharedBusyFlag>) -> Self {
        let app = Self {
            client,
            view,
            busy,
            logs: Vec::new(),
            saved_id_input: String::new(),
        };
        app.request_curve();
        app.send(ExplorerCommand::RefreshHistory);
        app
    }

    fn send(&self, command: ExplorerCommand) {
        if let Err(e) = self.client.send(command) {
            error!("{}", e);
        }
    }

    fn request_curve(&self) {
        self.send(ExplorerCommand::Calculate(self.view.sliders.collect()));
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            match event {
                ExplorerEvent::Curve(outcome) => {
                    let refresh_history = outcome.value.is_ok();
                    if self.view.apply_curve(outcome) == Applied::Rendered && refresh_history {
                        self.send(ExplorerCommand::RefreshHistory);
                    }
                }
                ExplorerEvent::Demo(outcome) => {
                    let applied = self.view.apply_demo(outcome);
                    debug!(?applied, "Demo outcome applied");
                }
                ExplorerEvent::History(result) => self.view.apply_history(result),
                ExplorerEvent::Log(line) => {
                    self.logs.push(line.trim_end().to_string());
                    if self.logs.len() > MAX_LOG_LINES {
                        let excess = self.logs.len() - MAX_LOG_LINES;
                        self.logs.drain(..excess);
                    }
                }
            }
        }
    }

    fn render_sliders(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.add_space(DesignSystem::SPACING_SMALL);

        let mut released = false;
        for id in SliderId::ALL {
            ui.label(egui::RichText::new(id.label()).color(DesignSystem::TEXT_SECONDARY));
            ui.push_id(id.element_id(), |ui| {
                ui.horizontal(|ui| {
                    let value_label = self.view.sliders.value_label(id);
                    let slider = egui::Slider::new(self.view.sliders.value_mut(id), id.range())
                        .step_by(0.1)
                        .show_value(false);
                    let response = ui.add(slider);
                    ui.monospace(value_label);
                    released |= response.drag_stopped()
                        || (response.changed() && !response.dragged());
                });
            });
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        if ui.button("Calculate").clicked() || released {
            self.request_curve();
        }

        ui.separator();
        if self.view.panels.results_visible() {
            if ui.button("Show non-linear separability demo").clicked() {
                self.send(ExplorerCommand::LoadDemo);
            }
        } else if ui.button("Back to results").clicked() {
            self.view.hide_demo();
        }

        ui.separator();
        self.render_history(ui);
    }

    fn render_history(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Saved parameter sets");
            if ui.small_button("⟳").clicked() {
                self.send(ExplorerCommand::RefreshHistory);
            }
        });

        let mut load = None;
        egui::ScrollArea::vertical()
            .id_salt("history_scroll")
            .max_height(180.0)
            .show(ui, |ui| {
                for saved in &self.view.history {
                    ui.horizontal(|ui| {
                        ui.label(format!(
                            "#{}  k={}  x₀={}",
                            saved.id, saved.steepness, saved.x_shift
                        ));
                        if ui.small_button("Load").clicked() {
                            load = Some(saved.id);
                        }
                    });
                }
            });

        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.saved_id_input).desired_width(60.0));
            if ui.button("Load id").clicked() {
                match self.saved_id_input.trim().parse::<u64>() {
                    Ok(id) => load = Some(id),
                    Err(_) => {
                        self.view.alert = Some(format!("Error: invalid id {:?}", self.saved_id_input))
                    }
                }
            }
        });

        if let Some(id) = load {
            self.send(ExplorerCommand::LoadSaved(id));
        }
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        let chart_height = (ui.available_height() * 0.6).max(280.0);
        render_line_chart(ui, &self.view.line_chart, chart_height);
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.columns(2, |cols| {
            render_card(&mut cols[0], "Results", |ui| match &self.view.results_info {
                Some(info) => {
                    ui.label(info);
                }
                None => {
                    ui.label(egui::RichText::new("No results yet.").color(DesignSystem::TEXT_MUTED));
                }
            });
            render_card(&mut cols[1], "Sampled values", |ui| {
                render_summary_table(ui, &self.view.table);
            });
        });
    }

    fn render_demo(&self, ui: &mut egui::Ui) {
        let chart_height = (ui.available_height() * 0.55).max(260.0);
        ui.columns(2, |cols| {
            if let Some(chart) = &self.view.original_chart {
                render_scatter_chart(&mut cols[0], "original_data_plot", chart, chart_height);
            }
            if let Some(chart) = &self.view.transformation_chart {
                render_scatter_chart(&mut cols[1], "transformation_plot", chart, chart_height);
            }
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        if let Some(summary) = &self.view.demo_summary {
            render_card(ui, "Classification Results", |ui| {
                render_field(ui, "Accuracy:", &summary.accuracy);
                render_field(ui, "Decision boundary:", &format!("r = {}", summary.decision_boundary));
                render_field(ui, "Sigmoid steepness:", &summary.steepness);
                render_field(ui, "Explanation:", &summary.explanation);
            });
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.view.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&message).color(DesignSystem::DANGER));
                ui.add_space(DesignSystem::SPACING_SMALL);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.view.dismiss_alert();
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.drain_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sigmoid Explorer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.busy.is_busy() {
                        ui.label(
                            egui::RichText::new(self.busy.message())
                                .small()
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.add(egui::Spinner::new());
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in &self.logs {
                            ui.label(
                                egui::RichText::new(line)
                                    .monospace()
                                    .small()
                                    .color(DesignSystem::TEXT_MUTED),
                            );
                        }
                    });
            });

        egui::SidePanel::left("parameters_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| self.render_sliders(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.view.panels.demo_visible() {
                self.render_demo(ui);
            } else {
                self.render_results(ui);
            }
        });

        self.render_alert(ctx);

        // Keep polling for responses while requests are in flight.
        if self.busy.is_busy() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
