pub mod console;
pub mod pointer_controller;
pub mod session;
pub mod use_cases;

pub use console::CommandConsole;
pub use pointer_controller::{PointerController, PointerMode};
pub use session::{FrameInfo, GraphSession};
