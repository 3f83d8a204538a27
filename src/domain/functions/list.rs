use super::color::{PaletteColor, Rgba};
use super::entities::{FunctionId, GraphedFunction};
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Toward the front: drawn above, listed higher.
    Up,
    /// Toward the back.
    Down,
}

/// Aggregate - the ordered list of graphed functions.
///
/// Index 0 is the front: it is listed first and wins every contested pixel.
/// [`FunctionList::layer`] is the only operation that changes relative order.
#[derive(Debug, Clone, Default)]
pub struct FunctionList {
    functions: Vec<GraphedFunction>,
}

impl FunctionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function at the back with the next palette color.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        id: FunctionId,
    ) -> GraphResult<&GraphedFunction> {
        if self.position(id).is_some() {
            return Err(GraphError::InvalidFunctionId(id.value()));
        }

        let color = PaletteColor::cyclic(self.functions.len()).rgba();
        let function = GraphedFunction::new(id, name, color);
        log_info!(
            LogComponent::Domain("FunctionList"),
            "Added function {} '{}' with color {}",
            id,
            function.name,
            color.to_hex()
        );

        self.functions.push(function);
        Ok(&self.functions[self.functions.len() - 1])
    }

    /// Swap with the neighbour in the given direction. Returns `false` when the
    /// function is already at that end of the list.
    pub fn layer(&mut self, id: FunctionId, direction: Layer) -> GraphResult<bool> {
        let index = self.position(id).ok_or(GraphError::UnknownFunction(id.value()))?;
        let target = match direction {
            Layer::Up => index.checked_sub(1),
            Layer::Down => Some(index + 1).filter(|&i| i < self.functions.len()),
        };

        let Some(target) = target else {
            return Ok(false);
        };

        self.functions.swap(index, target);
        log_debug!(
            LogComponent::Domain("FunctionList"),
            "Function {} moved from position {} to {}",
            id,
            index,
            target
        );
        Ok(true)
    }

    pub fn layer_up(&mut self, id: FunctionId) -> GraphResult<bool> {
        self.layer(id, Layer::Up)
    }

    pub fn layer_down(&mut self, id: FunctionId) -> GraphResult<bool> {
        self.layer(id, Layer::Down)
    }

    /// Delete the entry, keeping the order of the survivors.
    pub fn remove(&mut self, id: FunctionId) -> GraphResult<GraphedFunction> {
        let index = self.position(id).ok_or(GraphError::UnknownFunction(id.value()))?;
        let removed = self.functions.remove(index);
        log_info!(LogComponent::Domain("FunctionList"), "Removed function {}", id);
        Ok(removed)
    }

    pub fn set_color(&mut self, id: FunctionId, color: Rgba) -> GraphResult<()> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    pub fn set_color_hex(&mut self, id: FunctionId, hex: &str) -> GraphResult<()> {
        let color = Rgba::from_hex(hex)?;
        self.set_color(id, color)
    }

    pub fn position(&self, id: FunctionId) -> Option<usize> {
        self.functions.iter().position(|f| f.id == id)
    }

    pub fn get(&self, id: FunctionId) -> Option<&GraphedFunction> {
        self.functions.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: FunctionId) -> GraphResult<&mut GraphedFunction> {
        self.functions
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(GraphError::UnknownFunction(id.value()))
    }

    /// Front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, GraphedFunction> {
        self.functions.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, GraphedFunction> {
        self.functions.iter_mut()
    }

    pub fn as_slice(&self) -> &[GraphedFunction] {
        &self.functions
    }

    pub fn ids(&self) -> Vec<FunctionId> {
        self.functions.iter().map(|f| f.id).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn clear_trace_labels(&mut self) {
        for function in &mut self.functions {
            function.trace_label = None;
        }
    }
}

impl<'a> IntoIterator for &'a FunctionList {
    type Item = &'a GraphedFunction;
    type IntoIter = std::slice::Iter<'a, GraphedFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
