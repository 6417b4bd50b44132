//! Chart Registry Module
//! Owns every live chart instance, keyed by surface id.

use std::collections::HashMap;

use crate::charts::{sample_bar, sample_scatter, ChartSpec};
use crate::error::{ChartError, ChartResult};

/// A chart bound to one surface for its lifetime.
///
/// The instance owns its spec; disposal happens through the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    spec: ChartSpec,
}

impl ChartInstance {
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn canvas_id(&self) -> &str {
        &self.spec.canvas_id
    }
}

/// Registry mapping surface id to its single chart instance.
///
/// Reinstalling on an occupied surface disposes the previous instance, so
/// repeated initialization cannot stack charts on one surface. At most one
/// surface holds fullscreen at a time.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, ChartInstance>,
    fullscreen: Option<String>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the two sample charts.
    pub fn with_sample_charts() -> Self {
        let mut registry = Self::new();
        registry.install(sample_scatter());
        registry.install(sample_bar());
        registry
    }

    /// Install a chart on its surface, returning the instance it replaced.
    pub fn install(&mut self, spec: ChartSpec) -> Option<ChartInstance> {
        let canvas_id = spec.canvas_id.clone();
        let replaced = self.charts.insert(canvas_id.clone(), ChartInstance { spec });
        if replaced.is_some() {
            tracing::debug!(canvas = %canvas_id, "replacing existing chart instance");
        }
        replaced
    }

    pub fn get(&self, canvas_id: &str) -> ChartResult<&ChartInstance> {
        self.charts
            .get(canvas_id)
            .ok_or_else(|| ChartError::ElementNotFound(canvas_id.to_string()))
    }

    pub fn contains(&self, canvas_id: &str) -> bool {
        self.charts.contains_key(canvas_id)
    }

    /// Dispose and return the instance on `canvas_id`.
    pub fn remove(&mut self, canvas_id: &str) -> ChartResult<ChartInstance> {
        let instance = self
            .charts
            .remove(canvas_id)
            .ok_or_else(|| ChartError::ElementNotFound(canvas_id.to_string()))?;
        if self.fullscreen.as_deref() == Some(canvas_id) {
            self.fullscreen = None;
        }
        Ok(instance)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Grant fullscreen to `canvas_id`.
    ///
    /// Denied while a different surface holds it; granting again to the
    /// current holder is a no-op.
    pub fn request_fullscreen(&mut self, canvas_id: &str) -> ChartResult<()> {
        if !self.contains(canvas_id) {
            return Err(ChartError::ElementNotFound(canvas_id.to_string()));
        }
        match self.fullscreen.as_deref() {
            Some(holder) if holder != canvas_id => {
                Err(ChartError::FullscreenDenied(canvas_id.to_string()))
            }
            _ => {
                self.fullscreen = Some(canvas_id.to_string());
                Ok(())
            }
        }
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    pub fn fullscreen_target(&self) -> Option<&str> {
        self.fullscreen.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BAR_CANVAS, SCATTER_CANVAS};
    use crate::error::ChartError;

    #[test]
    fn sample_registry_holds_both_surfaces() {
        let registry = ChartRegistry::with_sample_charts();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(SCATTER_CANVAS));
        assert!(registry.contains(BAR_CANVAS));
    }

    #[test]
    fn lookup_of_missing_surface_reports_element_not_found() {
        let registry = ChartRegistry::new();
        let err = registry.get("nope").unwrap_err();
        assert!(matches!(err, ChartError::ElementNotFound(id) if id == "nope"));
    }

    #[test]
    fn reinstall_replaces_instead_of_stacking() {
        let mut registry = ChartRegistry::new();
        assert!(registry.install(sample_scatter()).is_none());
        let replaced = registry.install(sample_scatter());
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn fullscreen_requires_an_installed_surface() {
        let mut registry = ChartRegistry::new();
        let err = registry.request_fullscreen(SCATTER_CANVAS).unwrap_err();
        assert!(matches!(err, ChartError::ElementNotFound(_)));
    }

    #[test]
    fn second_surface_is_denied_while_fullscreen_is_held() {
        let mut registry = ChartRegistry::with_sample_charts();
        registry.request_fullscreen(SCATTER_CANVAS).unwrap();
        let err = registry.request_fullscreen(BAR_CANVAS).unwrap_err();
        assert!(matches!(err, ChartError::FullscreenDenied(id) if id == BAR_CANVAS));
        // The holder may re-request without losing the grant.
        registry.request_fullscreen(SCATTER_CANVAS).unwrap();
        assert_eq!(registry.fullscreen_target(), Some(SCATTER_CANVAS));
    }

    #[test]
    fn exit_clears_the_fullscreen_holder() {
        let mut registry = ChartRegistry::with_sample_charts();
        registry.request_fullscreen(BAR_CANVAS).unwrap();
        registry.exit_fullscreen();
        assert_eq!(registry.fullscreen_target(), None);
        registry.request_fullscreen(SCATTER_CANVAS).unwrap();
    }

    #[test]
    fn removing_the_holder_drops_its_fullscreen_grant() {
        let mut registry = ChartRegistry::with_sample_charts();
        registry.request_fullscreen(SCATTER_CANVAS).unwrap();
        let removed = registry.remove(SCATTER_CANVAS).unwrap();
        assert_eq!(removed.canvas_id(), SCATTER_CANVAS);
        assert_eq!(registry.fullscreen_target(), None);
        assert_eq!(registry.len(), 1);
    }
}
