//! Coordinate window, pixel ownership decoding and trace state.

pub mod ownership;
pub mod trace;
pub mod value_objects;
pub mod viewport;

pub use ownership::{AXIS_BIT, PixelOwner, resolve_owner};
pub use trace::{TraceState, TraceToggle};
pub use value_objects::{PixelSize, WindowBounds, quantize};
pub use viewport::{ExtentLimits, Reconciliation, Viewport, ZoomOutcome};
