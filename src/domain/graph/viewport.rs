use super::value_objects::{PixelSize, WindowBounds, quantize};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Smallest window extents accepted by a zoom-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentLimits {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for ExtentLimits {
    fn default() -> Self {
        Self { min_width: 1.0, min_height: 1.0 }
    }
}

/// Result of a wheel zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    Applied,
    /// Resulting extent would be negative.
    RejectedInverted,
    /// Zoom-in would cross the minimum extent.
    RejectedTooSmall,
}

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing changed since the engine was last told about the window.
    Unchanged,
    /// Window moved (pan, zoom, reset) without a surface resize.
    WindowChanged,
    /// Surface was resized and the window rescaled around its center.
    Resized,
}

impl Reconciliation {
    pub fn needs_engine_resize(self) -> bool {
        self != Reconciliation::Unchanged
    }
}

/// Entity - the visible coordinate window and its pixel mapping.
///
/// All mutation goes through the pan/zoom/reset/reconcile operations below so
/// that `x_max > x_min` and `y_max > y_min` always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    bounds: WindowBounds,
    size: PixelSize,
    default_bounds: WindowBounds,
    max_size: PixelSize,
    limits: ExtentLimits,
    dirty: bool,
}

impl Viewport {
    pub fn new(
        size: PixelSize,
        default_bounds: WindowBounds,
        max_size: PixelSize,
        limits: ExtentLimits,
    ) -> Self {
        Self {
            bounds: default_bounds,
            size: size.capped(max_size),
            default_bounds,
            max_size,
            limits,
            // the engine has never seen this window
            dirty: true,
        }
    }

    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn limits(&self) -> ExtentLimits {
        self.limits
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resize Reconciler: compare the surface size against the last observed
    /// one and rescale the window so its center is preserved.
    pub fn reconcile(&mut self, surface: PixelSize) -> Reconciliation {
        let new_size = surface.capped(self.max_size);

        // a collapsed surface (hidden or mid-layout) is not a resize
        if new_size.is_empty() {
            return Reconciliation::Unchanged;
        }

        if new_size == self.size {
            if self.dirty {
                self.dirty = false;
                return Reconciliation::WindowChanged;
            }
            return Reconciliation::Unchanged;
        }

        if !self.size.is_empty() {
            let x_scale = f64::from(new_size.width) / f64::from(self.size.width);
            let y_scale = f64::from(new_size.height) / f64::from(self.size.height);
            let rescaled = self.bounds.rescaled(x_scale, y_scale);

            // quantization can collapse a tiny window; keep the old one then
            if rescaled.is_valid() {
                self.bounds = rescaled;
            }
        }

        log_debug!(
            LogComponent::Domain("Viewport"),
            "Surface {}x{} -> {}x{}, window {:?}",
            self.size.width,
            self.size.height,
            new_size.width,
            new_size.height,
            self.bounds
        );

        self.size = new_size;
        self.dirty = false;
        Reconciliation::Resized
    }

    /// Drag by a pointer movement delta in pixels. The x bounds shift against
    /// the pointer, the y bounds shift with it.
    pub fn pan(&mut self, movement_x: f64, movement_y: f64, sensitivity: f64) {
        let x_scale = self.bounds.width() / 20.0;
        let y_scale = self.bounds.height() / 20.0;

        let dx = movement_x * x_scale * sensitivity;
        let dy = movement_y * y_scale * sensitivity;
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }

        self.bounds.x_min -= dx;
        self.bounds.x_max -= dx;
        self.bounds.y_min += dy;
        self.bounds.y_max += dy;
        self.dirty = true;
    }

    /// Cursor-anchored wheel zoom. `delta > 0` zooms out.
    ///
    /// The extent grows by `delta * extent * sensitivity`, split between the
    /// two edges by the cursor position so the point under the cursor keeps
    /// its domain coordinate.
    pub fn zoom_at(
        &mut self,
        delta: f64,
        cursor_x: f64,
        cursor_y: f64,
        sensitivity: f64,
    ) -> ZoomOutcome {
        let width = self.bounds.width();
        let height = self.bounds.height();

        let x_change = delta * width * sensitivity;
        let y_change = delta * height * sensitivity;
        let new_width = width + x_change;
        let new_height = height + y_change;

        if !(new_width > 0.0 && new_height > 0.0) {
            log_trace!(LogComponent::Domain("Viewport"), "Zoom rejected: inverted window");
            return ZoomOutcome::RejectedInverted;
        }
        if (new_width < self.limits.min_width && x_change < 0.0)
            || (new_height < self.limits.min_height && y_change < 0.0)
        {
            log_trace!(LogComponent::Domain("Viewport"), "Zoom rejected: minimum extent");
            return ZoomOutcome::RejectedTooSmall;
        }

        let x_bias = self.bias(cursor_x, self.size.width);
        // pixel rows grow downward while y grows upward
        let y_bias = self.bias(cursor_y, self.size.height);

        self.bounds.x_min -= x_change * x_bias;
        self.bounds.x_max += x_change * (1.0 - x_bias);
        self.bounds.y_max += y_change * y_bias;
        self.bounds.y_min -= y_change * (1.0 - y_bias);
        self.dirty = true;

        ZoomOutcome::Applied
    }

    /// Restore the default window.
    pub fn reset(&mut self) {
        self.bounds = self.default_bounds;
        self.dirty = true;
    }

    /// Domain x under a pixel column, by linear interpolation over the width.
    pub fn pixel_to_x(&self, pixel_x: f64) -> f64 {
        if self.size.width == 0 {
            return self.bounds.x_min;
        }
        self.bounds.x_min + (pixel_x / f64::from(self.size.width)) * self.bounds.width()
    }

    /// Domain y under a pixel row (row 0 is the top edge).
    pub fn pixel_to_y(&self, pixel_y: f64) -> f64 {
        if self.size.height == 0 {
            return self.bounds.y_max;
        }
        self.bounds.y_max - (pixel_y / f64::from(self.size.height)) * self.bounds.height()
    }

    /// Text for the four bound labels: x min, x max, y min, y max.
    pub fn bound_labels(&self) -> [String; 4] {
        let b = self.bounds;
        [
            format!("x = {}", quantize(b.x_min)),
            format!("x = {}", quantize(b.x_max)),
            format!("y = {}", quantize(b.y_min)),
            format!("y = {}", quantize(b.y_max)),
        ]
    }

    fn bias(&self, cursor: f64, extent_px: u32) -> f64 {
        if extent_px == 0 || !cursor.is_finite() {
            return 0.5;
        }
        (cursor / f64::from(extent_px)).clamp(0.0, 1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            PixelSize::new(1000, 1000),
            WindowBounds::default(),
            PixelSize::new(1000, 1000),
            ExtentLimits::default(),
        )
    }
}
