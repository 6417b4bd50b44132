//! Error types shared across the chart surfaces and the GUI shell.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures surfaced by chart surface operations.
///
/// Lookups against missing surfaces, drawing failures and rejected
/// fullscreen requests are all reported to the caller instead of
/// panicking; the GUI shell routes them into the status bar.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("drawing context unavailable for '{id}': {reason}")]
    ContextUnavailable { id: String, reason: String },

    #[error("fullscreen request denied for '{0}'")]
    FullscreenDenied(String),

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurfaceSize { width: u32, height: u32 },

    #[error("image encoding failed: {0}")]
    EncodingFailed(#[from] image::ImageError),

    #[error("failed to write chart image: {0}")]
    ExportFailed(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn context(id: &str, reason: impl ToString) -> Self {
        Self::ContextUnavailable {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_the_surface() {
        let err = ChartError::ElementNotFound("scatterPlot".into());
        assert_eq!(err.to_string(), "element not found: scatterPlot");
    }

    #[test]
    fn context_helper_keeps_id_and_reason() {
        let err = ChartError::context("barChart", "backend gone");
        assert_eq!(
            err.to_string(),
            "drawing context unavailable for 'barChart': backend gone"
        );
    }
}
