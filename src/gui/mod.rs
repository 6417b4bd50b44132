//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::CompareViewApp;
pub use chart_viewer::{ChartAction, ChartViewer};
pub use control_panel::{Toolbar, ToolbarFragment, ToolbarState, TOOLBAR_MOUNTS};
