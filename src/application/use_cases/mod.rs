pub mod compose_frame;
pub mod trace_readout;

pub use compose_frame::*;
pub use trace_readout::*;
