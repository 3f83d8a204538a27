use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::application::use_cases::FrameImage;
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::graph::PixelSize;
use crate::domain::logging::{LogComponent, get_logger};

/// Blits composed frames onto a 2D canvas and reports its display size.
pub struct CanvasPresenter {
    canvas_id: String,
}

impl CanvasPresenter {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    fn canvas(&self) -> GraphResult<HtmlCanvasElement> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&self.canvas_id))
            .ok_or_else(|| GraphError::Rendering(format!("canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GraphError::Rendering(format!("#{} is not a canvas", self.canvas_id)))
    }

    /// Content-box size of the canvas in CSS pixels, the same box pointer
    /// offsets are measured in.
    pub fn surface_size(&self) -> GraphResult<PixelSize> {
        let canvas = self.canvas()?;
        Ok(PixelSize::new(
            canvas.client_width().max(0) as u32,
            canvas.client_height().max(0) as u32,
        ))
    }

    /// Draw `image` at the origin, matching the backing store to its size.
    pub fn present(&self, image: &FrameImage) -> GraphResult<()> {
        let size = image.size();
        if size.is_empty() {
            return Ok(());
        }

        let canvas = self.canvas()?;
        if canvas.width() != size.width || canvas.height() != size.height {
            canvas.set_width(size.width);
            canvas.set_height(size.height);
            get_logger().debug(
                LogComponent::Infrastructure("CanvasPresenter"),
                &format!("📐 Backing store now {}x{}", size.width, size.height),
            );
        }

        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| GraphError::Rendering("2D context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GraphError::Rendering("failed to cast to 2D context".into()))?;

        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(image.as_bytes()),
            size.width,
            size.height,
        )
        .map_err(js_error)?;
        context.put_image_data(&data, 0.0, 0.0).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> GraphError {
    GraphError::Rendering(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
