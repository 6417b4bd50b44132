//! Static Chart Renderer
//! Renders a chart surface to an offscreen bitmap and encodes it as PNG,
//! for the save-chart-as-image action. Axis text stays in the interactive
//! layer; the bitmap carries grid, axes and series only.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;

use crate::charts::{ChartDataSet, ChartRegistry, ChartSpec};
use crate::error::{ChartError, ChartResult};

/// Default pixel size of exported chart images.
pub const EXPORT_WIDTH: u32 = 800;
pub const EXPORT_HEIGHT: u32 = 600;

const MARKER_RADIUS: i32 = 5;
const BAR_HALF_WIDTH: f64 = 0.3;

/// Render `spec` to PNG bytes at the given pixel size.
pub fn render_png_bytes(spec: &ChartSpec, width: u32, height: u32) -> ChartResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(ChartError::InvalidSurfaceSize { width, height });
    }

    let mut raw = vec![0u8; width as usize * height as usize * 3];
    draw_to_buffer(spec, &mut raw, width, height)?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&raw, width, height, ExtendedColorType::Rgb8)?;
    Ok(png)
}

/// Render the chart on `canvas_id` and write it to `dir/<canvas_id>.png`.
pub fn export_png(registry: &ChartRegistry, canvas_id: &str, dir: &Path) -> ChartResult<PathBuf> {
    let instance = registry.get(canvas_id)?;
    let bytes = render_png_bytes(instance.spec(), EXPORT_WIDTH, EXPORT_HEIGHT)?;

    let path = dir.join(format!("{canvas_id}.png"));
    fs::write(&path, &bytes)?;
    tracing::info!(canvas = canvas_id, path = %path.display(), "chart image exported");
    Ok(path)
}

fn draw_to_buffer(spec: &ChartSpec, raw: &mut [u8], width: u32, height: u32) -> ChartResult<()> {
    let id = spec.canvas_id.as_str();
    let color = RGBColor(spec.color.r(), spec.color.g(), spec.color.b());

    let root = BitMapBackend::with_buffer(raw, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartError::context(id, e))?;

    match &spec.data {
        ChartDataSet::Points(points) => {
            let (x_min, x_max) = value_bounds(points.iter().map(|p| p[0]));
            let (y_min, y_max) = value_bounds(points.iter().map(|p| p[1]));

            let mut chart = ChartBuilder::on(&root)
                .margin(16)
                .x_label_area_size(24)
                .y_label_area_size(32)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(|e| ChartError::context(id, e))?;
            chart
                .configure_mesh()
                .x_labels(0)
                .y_labels(0)
                .draw()
                .map_err(|e| ChartError::context(id, e))?;
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|p| Circle::new((p[0], p[1]), MARKER_RADIUS, color.filled())),
                )
                .map_err(|e| ChartError::context(id, e))?;
        }
        ChartDataSet::Bars { values, .. } => {
            let n = values.len().max(1);
            let top = values.iter().copied().fold(0.0_f64, f64::max);
            let y_max = if top > 0.0 { top * 1.1 } else { 1.0 };

            let mut chart = ChartBuilder::on(&root)
                .margin(16)
                .x_label_area_size(24)
                .y_label_area_size(32)
                .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_max)
                .map_err(|e| ChartError::context(id, e))?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(0)
                .y_labels(0)
                .draw()
                .map_err(|e| ChartError::context(id, e))?;
            chart
                .draw_series(values.iter().enumerate().map(|(i, &value)| {
                    Rectangle::new(
                        [
                            (i as f64 - BAR_HALF_WIDTH, 0.0),
                            (i as f64 + BAR_HALF_WIDTH, value),
                        ],
                        color.filled(),
                    )
                }))
                .map_err(|e| ChartError::context(id, e))?;
        }
    }

    root.present().map_err(|e| ChartError::context(id, e))?;
    Ok(())
}

/// Min/max of an iterator, padded so series never sit on the plot border.
fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_infinite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span == 0.0 { 1.0 } else { span * 0.15 };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{sample_bar, sample_scatter, SCATTER_CANVAS};
    use crate::error::ChartError;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn scatter_renders_to_png_bytes() {
        let bytes = render_png_bytes(&sample_scatter(), 320, 240).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn bar_renders_to_png_bytes() {
        let bytes = render_png_bytes(&sample_bar(), 320, 240).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = render_png_bytes(&sample_scatter(), 0, 240).unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidSurfaceSize {
                width: 0,
                height: 240
            }
        ));
    }

    #[test]
    fn export_names_the_file_after_the_surface() {
        let registry = ChartRegistry::with_sample_charts();
        let dir = tempfile::tempdir().unwrap();

        let path = export_png(&registry, SCATTER_CANVAS, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "scatterPlot.png");

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn export_of_unknown_surface_reports_element_not_found() {
        let registry = ChartRegistry::new();
        let err = export_png(&registry, "ghost", std::env::temp_dir().as_path()).unwrap_err();
        assert!(matches!(err, ChartError::ElementNotFound(id) if id == "ghost"));
    }

    #[test]
    fn bounds_pad_degenerate_spans() {
        let (lo, hi) = value_bounds([7.0, 7.0].into_iter());
        assert!(lo < 7.0 && hi > 7.0);
        let (lo, hi) = value_bounds(std::iter::empty());
        assert_eq!((lo, hi), (0.0, 1.0));
    }
}
