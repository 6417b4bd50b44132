//! CompareView Main Application
//! Main window wiring the two toolbar mounts, the chart viewer and the
//! per-chart export/fullscreen actions.

use egui::SidePanel;

use crate::charts::{self, ChartRegistry};
use crate::gui::{ChartAction, ChartViewer, Toolbar, TOOLBAR_MOUNTS};

/// Main application window.
pub struct CompareViewApp {
    registry: ChartRegistry,
    toolbar_left: Toolbar,
    toolbar_right: Toolbar,
    chart_viewer: ChartViewer,
    status: String,
}

impl CompareViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            registry: ChartRegistry::with_sample_charts(),
            toolbar_left: Toolbar::mount(TOOLBAR_MOUNTS[0]),
            toolbar_right: Toolbar::mount(TOOLBAR_MOUNTS[1]),
            chart_viewer: ChartViewer::new(),
            status: "Ready".to_string(),
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: ChartAction) {
        match action {
            ChartAction::ExportPng(canvas_id) => self.handle_export(&canvas_id),
            ChartAction::EnterFullscreen(canvas_id) => self.handle_fullscreen(ctx, &canvas_id),
            ChartAction::ExitFullscreen => {
                self.registry.exit_fullscreen();
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
            }
            ChartAction::None => {}
        }
    }

    /// Save the chart on `canvas_id` as `<canvas_id>.png` in a chosen folder.
    fn handle_export(&mut self, canvas_id: &str) {
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose download folder")
            .pick_folder()
        else {
            return; // User cancelled
        };

        match charts::export_png(&self.registry, canvas_id, &dir) {
            Ok(path) => {
                self.status = format!("Saved {}", path.display());
            }
            Err(e) => {
                tracing::warn!(canvas = canvas_id, error = %e, "chart export failed");
                self.status = format!("Export failed: {e}");
            }
        }
    }

    fn handle_fullscreen(&mut self, ctx: &egui::Context, canvas_id: &str) {
        match self.registry.request_fullscreen(canvas_id) {
            Ok(()) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            }
            Err(e) => {
                tracing::warn!(canvas = canvas_id, error = %e, "fullscreen request rejected");
                self.status = format!("Fullscreen unavailable: {e}");
            }
        }
    }
}

impl eframe::App for CompareViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // While a surface holds fullscreen, only that chart is presented.
        if let Some(canvas_id) = self.registry.fullscreen_target().map(str::to_owned) {
            let mut action = ChartAction::None;
            egui::CentralPanel::default().show(ctx, |ui| {
                action = self
                    .chart_viewer
                    .show_fullscreen(ui, &self.registry, &canvas_id);
            });
            self.handle_action(ctx, action);
            return;
        }

        // The two toolbar mount points, identical fragment content in each.
        SidePanel::left(TOOLBAR_MOUNTS[0])
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.toolbar_left.show(ui);
                });
            });

        SidePanel::right(TOOLBAR_MOUNTS[1])
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.toolbar_right.show(ui);
                });
            });

        egui::TopBottomPanel::bottom("statusBar").show(ctx, |ui| {
            let status_color = if self.status.contains("failed") || self.status.contains("unavailable")
            {
                egui::Color32::from_rgb(220, 53, 69)
            } else {
                egui::Color32::GRAY
            };
            ui.label(
                egui::RichText::new(&self.status)
                    .size(11.0)
                    .color(status_color),
            );
        });

        let mut action = ChartAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.chart_viewer.show(ui, &self.registry);
        });
        self.handle_action(ctx, action);
    }
}
