pub mod wasm_api;

pub use wasm_api::{CANVAS_ID, add_graph_fn, dispatch, engine_ready};
