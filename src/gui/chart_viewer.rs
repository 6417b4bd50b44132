//! Chart Viewer Widget
//! Central panel showing one card per chart surface, each with its
//! save-as-image and fullscreen actions.

use egui::{Color32, RichText, ScrollArea, Stroke};

use crate::charts::{ChartInstance, ChartPlotter, ChartRegistry, BAR_CANVAS, SCATTER_CANVAS};

const CHART_SPACING: f32 = 15.0;
const PLOT_HEIGHT: f32 = 320.0;

/// Actions triggered from chart cards.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartAction {
    None,
    ExportPng(String),
    EnterFullscreen(String),
    ExitFullscreen,
}

/// Scrollable display area for the registered chart surfaces.
pub struct ChartViewer {
    /// Card order: scatter first, then bar.
    order: Vec<&'static str>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            order: vec![SCATTER_CANVAS, BAR_CANVAS],
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw all chart cards; returns the action of the last clicked button.
    pub fn show(&mut self, ui: &mut egui::Ui, registry: &ChartRegistry) -> ChartAction {
        if registry.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Charts").size(20.0));
            });
            return ChartAction::None;
        }

        let mut action = ChartAction::None;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for canvas_id in &self.order {
                    if let Ok(instance) = registry.get(canvas_id) {
                        let card_action = Self::draw_chart_card(ui, instance);
                        if card_action != ChartAction::None {
                            action = card_action;
                        }
                        ui.add_space(CHART_SPACING);
                    }
                }
            });
        action
    }

    /// Draw the single maximized chart while its surface holds fullscreen.
    pub fn show_fullscreen(
        &mut self,
        ui: &mut egui::Ui,
        registry: &ChartRegistry,
        canvas_id: &str,
    ) -> ChartAction {
        let Ok(instance) = registry.get(canvas_id) else {
            // Surface disposed while fullscreen; fall back to the normal layout.
            return ChartAction::ExitFullscreen;
        };

        let mut action = ChartAction::None;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&instance.spec().dataset_label)
                    .size(18.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Exit Fullscreen").clicked() {
                    action = ChartAction::ExitFullscreen;
                }
            });
        });
        ui.add_space(8.0);

        let height = (ui.available_height() - CHART_SPACING).max(PLOT_HEIGHT);
        ChartPlotter::draw(ui, instance.spec(), height);
        action
    }

    fn draw_chart_card(ui: &mut egui::Ui, instance: &ChartInstance) -> ChartAction {
        let mut action = ChartAction::None;
        let spec = instance.spec();

        egui::Frame::none()
            .rounding(8.0)
            .stroke(Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&spec.dataset_label).size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⛶ Fullscreen").clicked() {
                            action = ChartAction::EnterFullscreen(spec.canvas_id.clone());
                        }
                        if ui.button("💾 Save PNG").clicked() {
                            action = ChartAction::ExportPng(spec.canvas_id.clone());
                        }
                    });
                });

                ui.add_space(8.0);
                ChartPlotter::draw(ui, spec, PLOT_HEIGHT);
            });

        action
    }
}
