//! Graphed functions aggregate: ids, colors and the ordered list.

pub mod color;
pub mod entities;
pub mod list;

pub use color::{PaletteColor, Rgba};
pub use entities::{FunctionId, GraphedFunction, MAX_GRAPH_FUNCTIONS};
pub use list::{FunctionList, Layer};
