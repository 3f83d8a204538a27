//! Decoding of the engine's per-pixel ownership words.
//!
//! Bit 0 marks an axis pixel; bit `id + 1` marks a pixel on the curve of
//! function `id`. This is the only place that knows the layout.

use crate::domain::functions::{FunctionId, GraphedFunction};

pub const AXIS_BIT: u32 = 1;

/// Bit carried by pixels of function `id`.
pub fn function_bit(id: FunctionId) -> u32 {
    // ids are < 30, so the shift stays inside the word
    1u32 << (id.value() + 1)
}

pub fn is_owned_by(pixel: u32, id: FunctionId) -> bool {
    pixel & function_bit(id) != 0
}

/// Who gets to paint a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelOwner<'a> {
    Empty,
    Function(&'a GraphedFunction),
    Axis,
    /// Bits are set, but for no function in the list (e.g. one just removed).
    Unclaimed,
}

/// Resolve a pixel against functions given front to back; the first match wins.
pub fn resolve_owner<'a, I>(pixel: u32, functions: I) -> PixelOwner<'a>
where
    I: IntoIterator<Item = &'a GraphedFunction>,
{
    if pixel == 0 {
        return PixelOwner::Empty;
    }

    if let Some(function) = functions.into_iter().find(|f| is_owned_by(pixel, f.id)) {
        return PixelOwner::Function(function);
    }

    if pixel == AXIS_BIT { PixelOwner::Axis } else { PixelOwner::Unclaimed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::functions::Rgba;

    fn function(raw: u32) -> GraphedFunction {
        GraphedFunction::new(FunctionId::new(raw).unwrap(), format!("f{raw}"), Rgba::BLACK)
    }

    #[test]
    fn bit_layout_is_shifted_by_axis() {
        assert_eq!(function_bit(FunctionId::new(0).unwrap()), 0b10);
        assert_eq!(function_bit(FunctionId::new(29).unwrap()), 1 << 30);
    }

    #[test]
    fn axis_only_when_nothing_else_is_set() {
        let fns = [function(0)];
        assert_eq!(resolve_owner(AXIS_BIT, &fns), PixelOwner::Axis);
        assert_eq!(resolve_owner(AXIS_BIT | 0b10, &fns), PixelOwner::Function(&fns[0]));
        assert_eq!(resolve_owner(AXIS_BIT | 0b100, &fns), PixelOwner::Unclaimed);
        assert_eq!(resolve_owner(0, &fns), PixelOwner::Empty);
    }
}
