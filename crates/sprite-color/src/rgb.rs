//! Opaque RGB colors without an alpha channel.

use crate::color::ArgbColor;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An RGB color with 8-bit red, green and blue components.
///
/// This is the alpha-less counterpart of [`ArgbColor`]. Values are obtained
/// from an [`ArgbColor`] only through the explicit [`ArgbColor::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    /// Creates a new color from red, green and blue components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed value (0x00RRGGBB).
    ///
    /// The most significant byte is ignored.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Returns the color as a packed value (0x00RRGGBB).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Pairs this color with an alpha value.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> ArgbColor {
        ArgbColor::from_rgb(a, self)
    }
}

impl Hash for RgbColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.to_u32());
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RgbColor [R={}, G={}, B={}]", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RgbColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_u32())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RgbColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <u32 as serde::Deserialize>::deserialize(deserializer).map(Self::from_u32)
    }
}
