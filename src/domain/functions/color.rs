use crate::domain::errors::{GraphError, GraphResult};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Value Object - 8-bit RGBA pixel, laid out exactly as canvas `ImageData`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `#rrggbb`, each channel zero-padded to two digits. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (leading `#` optional). Alpha is always 255.
    pub fn from_hex(hex: &str) -> GraphResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GraphError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| GraphError::InvalidColor(hex.to_string()))
        };

        Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Default colors handed out to new functions, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum PaletteColor {
    Blue,
    Red,
    Black,
    Purple,
    Green,
    Orange,
    Brown,
}

impl PaletteColor {
    pub const fn rgba(self) -> Rgba {
        match self {
            Self::Blue => Rgba::opaque(36, 36, 255),
            Self::Red => Rgba::opaque(255, 0, 0),
            Self::Black => Rgba::opaque(0, 0, 0),
            Self::Purple => Rgba::opaque(255, 0, 255),
            Self::Green => Rgba::opaque(45, 200, 45),
            Self::Orange => Rgba::opaque(255, 160, 25),
            Self::Brown => Rgba::opaque(165, 42, 42),
        }
    }

    /// Palette entry for the `index`-th function, wrapping around.
    pub fn cyclic(index: usize) -> Self {
        Self::iter().nth(index % Self::COUNT).unwrap_or(Self::Blue)
    }
}
