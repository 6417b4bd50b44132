//! Charts module - chart model, registry and rendering

mod plotter;
mod registry;
mod renderer;
mod spec;

pub use plotter::ChartPlotter;
pub use registry::{ChartInstance, ChartRegistry};
pub use renderer::{export_png, render_png_bytes, EXPORT_HEIGHT, EXPORT_WIDTH};
pub use spec::{
    sample_bar, sample_scatter, ChartDataSet, ChartKind, ChartOptions, ChartSpec, BAR_CANVAS,
    BAR_FILL_COLOR, DEFAULT_CANVAS_WIDTH, SCATTER_CANVAS, SCATTER_MARKER_COLOR,
};
