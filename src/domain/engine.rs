use crate::domain::functions::FunctionId;
use crate::domain::graph::{PixelSize, WindowBounds};

/// Port to the external numeric/rasterization engine.
///
/// Implementations are only constructed once the engine has signalled that
/// it is ready, so none of these calls can reach an uninitialised engine.
pub trait GraphEngine {
    /// One-time setup.
    fn init(&mut self);

    /// Tell the engine about a new surface size and window. Must happen
    /// before the next [`GraphEngine::buffer`] after any change.
    fn resize(&mut self, size: PixelSize, bounds: WindowBounds);

    /// Current ownership buffer, `width * height` words. The borrow ends
    /// before the next `resize`, so no stale handle can be kept.
    fn buffer(&mut self) -> &[u32];

    /// Evaluate an expression or command; failures come back as display text.
    fn evaluate(&mut self, text: &str) -> String;

    /// Typeset form of the last evaluated result.
    fn latex_result(&mut self) -> String;

    /// Free engine-side resources of a removed function.
    fn release_function(&mut self, id: FunctionId);
}
