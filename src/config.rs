use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::functions::Rgba;
use crate::domain::graph::{ExtentLimits, PixelSize, WindowBounds};
use crate::domain::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Runtime settings for the graph surface. Every field has a default, so a
/// host may pass a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Period of the render tick.
    pub tick_interval_ms: u32,
    pub pan_sensitivity: f64,
    /// Wheel delta per full window extent; a delta of `zoom_divisor` doubles it.
    pub zoom_divisor: f64,
    pub min_window_width: f64,
    pub min_window_height: f64,
    pub max_surface_width: u32,
    pub max_surface_height: u32,
    pub default_window: WindowBounds,
    pub axis_color: Rgba,
    pub min_log_level: LogLevel,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            pan_sensitivity: 50.0 / 1000.0,
            zoom_divisor: 500.0,
            min_window_width: 1.0,
            min_window_height: 1.0,
            max_surface_width: 1000,
            max_surface_height: 1000,
            default_window: WindowBounds::default(),
            axis_color: Rgba::BLACK,
            min_log_level: LogLevel::Debug,
        }
    }
}

impl GraphConfig {
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(GraphError::Config("tick_interval_ms must be positive".into()));
        }
        if !(self.pan_sensitivity.is_finite() && self.pan_sensitivity > 0.0) {
            return Err(GraphError::Config("pan_sensitivity must be positive".into()));
        }
        if !(self.zoom_divisor.is_finite() && self.zoom_divisor > 0.0) {
            return Err(GraphError::Config("zoom_divisor must be positive".into()));
        }
        if !(self.min_window_width > 0.0 && self.min_window_height > 0.0) {
            return Err(GraphError::Config("minimum window extents must be positive".into()));
        }
        if self.max_surface_width == 0 || self.max_surface_height == 0 {
            return Err(GraphError::Config("maximum surface size must be nonzero".into()));
        }
        let window = self.default_window;
        if !window.is_valid()
            || window.width() < self.min_window_width
            || window.height() < self.min_window_height
        {
            return Err(GraphError::Config(format!("invalid default window {:?}", window)));
        }
        Ok(())
    }

    pub fn zoom_sensitivity(&self) -> f64 {
        1.0 / self.zoom_divisor
    }

    pub fn max_surface(&self) -> PixelSize {
        PixelSize::new(self.max_surface_width, self.max_surface_height)
    }

    pub fn extent_limits(&self) -> ExtentLimits {
        ExtentLimits { min_width: self.min_window_width, min_height: self.min_window_height }
    }
}
