//! Chart Spec Module
//! Plain-value chart descriptions plus the two preconfigured sample charts.

use egui::Color32;

/// Surface id of the scatter chart.
pub const SCATTER_CANVAS: &str = "scatterPlot";
/// Surface id of the bar chart.
pub const BAR_CANVAS: &str = "barChart";

/// Marker color of the sample scatter series.
pub const SCATTER_MARKER_COLOR: Color32 = Color32::from_rgb(255, 99, 132);
/// Fill color of the sample bar series.
pub const BAR_FILL_COLOR: Color32 = Color32::from_rgb(54, 162, 235);

/// Plot width used when a chart is not responsive.
pub const DEFAULT_CANVAS_WIDTH: f32 = 640.0;

/// Kind tag of a chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
}

/// Display options recognized by every chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Track the available width of the host panel.
    pub responsive: bool,
    pub show_legend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            show_legend: true,
        }
    }
}

/// Dataset of a chart surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDataSet {
    /// 2-D points, `[x, y]` per entry.
    Points(Vec<[f64; 2]>),
    /// One bar per label, label order is bar order.
    Bars {
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

/// Complete description of one chart surface.
///
/// Specs are plain values; the registry owns the instances built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas_id: String,
    pub kind: ChartKind,
    pub dataset_label: String,
    pub data: ChartDataSet,
    pub color: Color32,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Scatter chart over fixed 2-D points.
    pub fn scatter(
        canvas_id: impl Into<String>,
        dataset_label: impl Into<String>,
        points: Vec<[f64; 2]>,
        color: Color32,
        options: ChartOptions,
    ) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            kind: ChartKind::Scatter,
            dataset_label: dataset_label.into(),
            data: ChartDataSet::Points(points),
            color,
            options,
        }
    }

    /// Bar chart over fixed labeled magnitudes.
    pub fn bar(
        canvas_id: impl Into<String>,
        dataset_label: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
        color: Color32,
        options: ChartOptions,
    ) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            kind: ChartKind::Bar,
            dataset_label: dataset_label.into(),
            data: ChartDataSet::Bars { labels, values },
            color,
            options,
        }
    }
}

/// The "Companies" scatter chart preloaded at startup.
pub fn sample_scatter() -> ChartSpec {
    ChartSpec::scatter(
        SCATTER_CANVAS,
        "Companies",
        vec![[10.0, 20.0], [15.0, 25.0], [20.0, 30.0]],
        SCATTER_MARKER_COLOR,
        ChartOptions {
            responsive: true,
            show_legend: false,
        },
    )
}

/// The "Parameter" bar chart preloaded at startup.
pub fn sample_bar() -> ChartSpec {
    ChartSpec::bar(
        BAR_CANVAS,
        "Parameter",
        vec![
            "Company A".to_string(),
            "Company B".to_string(),
            "Company C".to_string(),
        ],
        vec![75.0, 88.0, 64.0],
        BAR_FILL_COLOR,
        ChartOptions::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_scatter_has_the_three_fixed_points() {
        let spec = sample_scatter();
        assert_eq!(spec.canvas_id, SCATTER_CANVAS);
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.dataset_label, "Companies");
        assert_eq!(
            spec.data,
            ChartDataSet::Points(vec![[10.0, 20.0], [15.0, 25.0], [20.0, 30.0]])
        );
    }

    #[test]
    fn sample_scatter_hides_legend_and_is_responsive() {
        let opts = sample_scatter().options;
        assert!(opts.responsive);
        assert!(!opts.show_legend);
    }

    #[test]
    fn sample_bar_has_three_labeled_bars_in_order() {
        let spec = sample_bar();
        assert_eq!(spec.canvas_id, BAR_CANVAS);
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.dataset_label, "Parameter");
        let ChartDataSet::Bars { labels, values } = &spec.data else {
            panic!("bar spec must carry a bar dataset");
        };
        assert_eq!(labels.len(), 3);
        assert_eq!(values, &[75.0, 88.0, 64.0]);
    }

    #[test]
    fn bar_chart_keeps_default_legend_visibility() {
        let opts = sample_bar().options;
        assert!(opts.responsive);
        assert!(opts.show_legend);
    }

    #[test]
    fn constructors_agree_kind_with_dataset_shape() {
        let scatter = ChartSpec::scatter(
            "s",
            "S",
            vec![[0.0, 0.0]],
            SCATTER_MARKER_COLOR,
            ChartOptions::default(),
        );
        assert!(matches!(scatter.data, ChartDataSet::Points(_)));
        assert_eq!(scatter.kind, ChartKind::Scatter);

        let bar = ChartSpec::bar(
            "b",
            "B",
            vec!["a".into()],
            vec![1.0],
            BAR_FILL_COLOR,
            ChartOptions::default(),
        );
        assert!(matches!(bar.data, ChartDataSet::Bars { .. }));
        assert_eq!(bar.kind, ChartKind::Bar);
    }
}
