//! CompareView - Company Comparison Toolbar & Chart Viewer
//!
//! A Rust application presenting the comparison toolbar controls and the
//! preconfigured company charts.

mod charts;
mod error;
mod gui;

use eframe::egui;
use gui::CompareViewApp;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("CompareView"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CompareView",
        options,
        Box::new(|cc| Ok(Box::new(CompareViewApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start CompareView: {e}"))
}
