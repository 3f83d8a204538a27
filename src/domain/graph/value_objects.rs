use serde::{Deserialize, Serialize};

/// Floor-quantize to two decimal places. Every displayed bound goes
/// through this, and so does every bound produced by a resize.
pub fn quantize(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Value Object - rectangular coordinate window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl WindowBounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }

    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_max > self.x_min
            && self.y_max > self.y_min
    }

    /// Rescale each half-extent around the center, quantizing the result.
    pub fn rescaled(&self, x_scale: f64, y_scale: f64) -> Self {
        let (horz_mid, vert_mid) = self.center();
        let half_width = self.width() / 2.0;
        let half_height = self.height() / 2.0;

        Self {
            x_min: quantize(horz_mid - x_scale * half_width),
            x_max: quantize(horz_mid + x_scale * half_width),
            y_min: quantize(vert_mid - y_scale * half_height),
            y_max: quantize(vert_mid + y_scale * half_height),
        }
    }
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

/// Value Object - surface size in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp to the maximum surface the engine buffer supports.
    pub fn capped(self, max: PixelSize) -> Self {
        Self { width: self.width.min(max.width), height: self.height.min(max.height) }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_truncates_toward_negative_infinity() {
        assert_eq!(quantize(1.239), 1.23);
        assert_eq!(quantize(-1.231), -1.24);
        assert_eq!(quantize(-10.0), -10.0);
    }

    #[test]
    fn rescale_keeps_center() {
        let bounds = WindowBounds::new(-4.0, 6.0, -2.0, 2.0);
        let scaled = bounds.rescaled(2.0, 0.5);
        assert_eq!(scaled, WindowBounds::new(-9.0, 11.0, -1.0, 1.0));
    }

    #[test]
    fn capped_size_respects_maximum() {
        let max = PixelSize::new(1000, 1000);
        assert_eq!(PixelSize::new(1600, 400).capped(max), PixelSize::new(1000, 400));
    }
}
