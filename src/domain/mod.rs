pub mod engine;
pub mod errors;
pub mod functions;
pub mod graph;
pub mod logging;

pub use engine::GraphEngine;
pub use errors::{GraphError, GraphResult};
