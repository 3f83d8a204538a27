pub mod canvas_presenter;
pub mod engine_bindings;
pub mod services;

pub use canvas_presenter::CanvasPresenter;
pub use engine_bindings::{ENGINE_GLOBAL, JsGraphEngine};
pub use services::{BrowserTimeProvider, ConsoleLogger};
