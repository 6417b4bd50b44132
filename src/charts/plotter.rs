//! Chart Plotter Module
//! Draws chart surfaces interactively using egui_plot.

use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::charts::{ChartDataSet, ChartSpec, DEFAULT_CANVAS_WIDTH};

const MARKER_RADIUS: f32 = 4.0;
const BAR_WIDTH: f64 = 0.6;

/// Draws chart surfaces into egui panels.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw `spec` into `ui` at the given plot height.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
        match &spec.data {
            ChartDataSet::Points(points) => Self::draw_scatter(ui, spec, points, height),
            ChartDataSet::Bars { labels, values } => {
                Self::draw_bar(ui, spec, labels, values, height)
            }
        }
    }

    fn draw_scatter(ui: &mut egui::Ui, spec: &ChartSpec, points: &[[f64; 2]], height: f32) {
        let mut plot = Plot::new(spec.canvas_id.clone())
            .height(height)
            .allow_scroll(false);
        if spec.options.show_legend {
            plot = plot.legend(Legend::default());
        }
        if !spec.options.responsive {
            plot = plot.width(DEFAULT_CANVAS_WIDTH);
        }

        let series = points.to_vec();
        plot.show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from_iter(series.iter().copied()))
                    .radius(MARKER_RADIUS)
                    .color(spec.color)
                    .name(&spec.dataset_label),
            );
        });
    }

    fn draw_bar(
        ui: &mut egui::Ui,
        spec: &ChartSpec,
        labels: &[String],
        values: &[f64],
        height: f32,
    ) {
        let x_labels: Vec<String> = labels.to_vec();
        let mut plot = Plot::new(spec.canvas_id.clone())
            .height(height)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-9 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            });
        if spec.options.show_legend {
            plot = plot.legend(Legend::default());
        }
        if !spec.options.responsive {
            plot = plot.width(DEFAULT_CANVAS_WIDTH);
        }

        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Bar::new(i as f64, value)
                    .width(BAR_WIDTH)
                    .fill(spec.color)
                    .name(labels.get(i).cloned().unwrap_or_default())
            })
            .collect();

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(spec.color)
                    .name(&spec.dataset_label),
            );
        });
    }
}
