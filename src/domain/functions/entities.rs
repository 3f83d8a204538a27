use super::color::Rgba;
use crate::domain::errors::{GraphError, GraphResult};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The engine packs ownership into a 32-bit word: bit 0 is the axis, bits
/// `1..=30` are functions, so at most 30 ids exist at once.
pub const MAX_GRAPH_FUNCTIONS: u32 = 30;

/// Value Object - engine-assigned function id, stable for the function's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct FunctionId(u32);

impl FunctionId {
    pub fn new(raw: u32) -> GraphResult<Self> {
        if raw >= MAX_GRAPH_FUNCTIONS {
            return Err(GraphError::InvalidFunctionId(raw));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Entity - one graphed function. Its compositing priority is its position
/// in the owning [`FunctionList`](super::FunctionList).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphedFunction {
    pub id: FunctionId,
    pub name: String,
    pub color: Rgba,
    /// Evaluated label shown instead of `name` while tracing.
    #[serde(skip)]
    pub trace_label: Option<String>,
}

impl GraphedFunction {
    pub fn new(id: FunctionId, name: impl Into<String>, color: Rgba) -> Self {
        Self { id, name: name.into(), color, trace_label: None }
    }

    pub fn display_text(&self) -> &str {
        self.trace_label.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_past_the_bitset_are_rejected() {
        assert!(FunctionId::new(29).is_ok());
        assert_eq!(FunctionId::new(30), Err(GraphError::InvalidFunctionId(30)));
    }

    #[test]
    fn trace_label_overrides_name() {
        let mut f = GraphedFunction::new(FunctionId::new(0).unwrap(), "x^2", Rgba::BLACK);
        assert_eq!(f.display_text(), "x^2");
        f.trace_label = Some("4".into());
        assert_eq!(f.display_text(), "4");
    }
}
