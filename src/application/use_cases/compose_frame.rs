use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::functions::{FunctionList, Rgba};
use crate::domain::graph::{PixelOwner, PixelSize, resolve_owner};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The composited RGBA image, reused across ticks.
#[derive(Debug, Clone, Default)]
pub struct FrameImage {
    size: PixelSize,
    pixels: Vec<Rgba>,
}

impl FrameImage {
    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw bytes in `ImageData` order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Resize to `size` and clear to transparent; only grows the allocation.
    fn prepare(&mut self, size: PixelSize) {
        self.size = size;
        self.pixels.clear();
        self.pixels.resize(size.pixel_count(), Rgba::TRANSPARENT);
    }
}

/// Use case: turn the engine's ownership buffer into a colored image.
#[derive(Debug, Clone)]
pub struct ComposeFrameUseCase {
    axis_color: Rgba,
}

impl ComposeFrameUseCase {
    pub fn new(axis_color: Rgba) -> Self {
        Self { axis_color }
    }

    /// One pass over the buffer. Earlier functions win shared pixels, the
    /// axis only shows where nothing else is set, and zero stays transparent.
    pub fn compose(
        &self,
        buffer: &[u32],
        size: PixelSize,
        functions: &FunctionList,
        image: &mut FrameImage,
    ) -> GraphResult<()> {
        if buffer.len() != size.pixel_count() {
            return Err(GraphError::Rendering(format!(
                "ownership buffer has {} pixels, expected {}x{}",
                buffer.len(),
                size.width,
                size.height
            )));
        }

        image.prepare(size);
        let axis_color = self.axis_color;
        let paint = |out: &mut Rgba, &pixel: &u32| match resolve_owner(pixel, functions) {
            PixelOwner::Function(function) => *out = function.color,
            PixelOwner::Axis => *out = axis_color,
            PixelOwner::Empty | PixelOwner::Unclaimed => {}
        };

        #[cfg(feature = "parallel")]
        image
            .pixels
            .par_iter_mut()
            .zip(buffer.par_iter())
            .for_each(|(out, pixel)| paint(out, pixel));

        #[cfg(not(feature = "parallel"))]
        image
            .pixels
            .iter_mut()
            .zip(buffer.iter())
            .for_each(|(out, pixel)| paint(out, pixel));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::functions::FunctionId;

    #[test]
    fn mismatched_buffer_is_rejected() {
        let compositor = ComposeFrameUseCase::new(Rgba::BLACK);
        let mut image = FrameImage::default();
        let result =
            compositor.compose(&[0; 3], PixelSize::new(2, 2), &FunctionList::new(), &mut image);
        assert!(matches!(result, Err(GraphError::Rendering(_))));
    }

    #[test]
    fn image_bytes_follow_rgba_order() {
        let compositor = ComposeFrameUseCase::new(Rgba::BLACK);
        let mut functions = FunctionList::new();
        functions.add("x", FunctionId::new(0).unwrap()).unwrap();
        let mut image = FrameImage::default();

        compositor.compose(&[0b10], PixelSize::new(1, 1), &functions, &mut image).unwrap();
        assert_eq!(image.as_bytes(), &[36, 36, 255, 255]);
    }
}
