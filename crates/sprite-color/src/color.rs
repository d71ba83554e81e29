//! Packed ARGB color values.
//!
//! This module provides the [`ArgbColor`] type: an immutable color made of
//! four 8-bit channels (alpha, red, green, blue).
//!
//! # Packed Representation
//!
//! Colors pack into a single `u32` in `0xAARRGGBB` order: alpha is the most
//! significant byte and blue the least significant one. The packed value is
//! also what the color hashes as, so equality and hashing always agree.
//!
//! # Examples
//!
//! ```
//! use sprite_color::color::ArgbColor;
//!
//! let c = ArgbColor::from_argb(0xFF10_2030);
//! assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 16, 32, 48));
//! assert_eq!(c.to_argb(), 0xFF10_2030);
//!
//! let half = ArgbColor::new(128, 255, 0, 0).premultiplied_alpha();
//! assert_eq!(half, ArgbColor::new(128, 128, 0, 0));
//! ```

use crate::error::{ColorParseError, Result};
use crate::rgb::RgbColor;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ARGB color with 8-bit alpha, red, green and blue components.
///
/// Values are immutable: there are no setters, and every operation that
/// derives a color returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgbColor {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Default for ArgbColor {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArgbColor [A={}, R={}, G={}, B={}]",
            self.a, self.r, self.g, self.b
        )
    }
}

impl Hash for ArgbColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.to_argb());
    }
}

// ============================================================================
// Constants
// ============================================================================

impl ArgbColor {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black (#FF000000).
    pub const BLACK: Self = Self::new(255, 0, 0, 0);

    /// Opaque white (#FFFFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
}

// ============================================================================
// Constructors
// ============================================================================

impl ArgbColor {
    /// Creates a new color from alpha, red, green and blue components.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates a color from a packed value (0xAARRGGBB).
    #[inline]
    pub const fn from_argb(value: u32) -> Self {
        Self::new(
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Creates a color from an alpha value and the components of an [`RgbColor`].
    #[inline]
    pub const fn from_rgb(a: u8, color: RgbColor) -> Self {
        Self::new(a, color.r(), color.g(), color.b())
    }

    /// Parses a color from a hex string.
    ///
    /// Supports `#RRGGBB` (opaque) and `#AARRGGBB`. The `#` prefix is
    /// optional and digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprite_color::ArgbColor;
    ///
    /// assert_eq!(ArgbColor::from_hex("#102030").unwrap(), ArgbColor::new(255, 16, 32, 48));
    /// assert_eq!(ArgbColor::from_hex("80ff0000").unwrap(), ArgbColor::new(128, 255, 0, 0));
    /// ```
    pub fn from_hex(input: &str) -> Result<Self> {
        Self::parse_hex(input).inspect_err(|err| {
            tracing::debug!(input, %err, "rejected hex color");
        })
    }

    fn parse_hex(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexChar);
        }

        let opaque = match hex.len() {
            6 => 0xFF00_0000,
            8 => 0,
            len => return Err(ColorParseError::InvalidLength(len)),
        };
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHexChar)?;
        Ok(Self::from_argb(value | opaque))
    }
}

// ============================================================================
// Component access and conversion
// ============================================================================

impl ArgbColor {
    /// Alpha component (0 = transparent, 255 = opaque).
    #[inline]
    pub const fn a(self) -> u8 {
        self.a
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

    /// Returns the color as a packed value (0xAARRGGBB).
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Drops the alpha channel, keeping red, green and blue.
    ///
    /// This is lossy: the alpha value cannot be recovered from the result.
    #[inline]
    pub const fn to_rgb(self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    /// Formats the color as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.to_argb())
    }
}

// ============================================================================
// Alpha
// ============================================================================

impl ArgbColor {
    /// Returns whether the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Returns whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Returns a new color with the given alpha and the same RGB components.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(a, self.r, self.g, self.b)
    }

    /// Returns a new color with each RGB component multiplied by alpha.
    ///
    /// Each component becomes `component * a / 255` with truncating division,
    /// so a fully transparent color collapses to black and an opaque color is
    /// returned unchanged.
    #[inline]
    pub const fn premultiplied_alpha(self) -> Self {
        Self::new(
            self.a,
            premultiply(self.r, self.a),
            premultiply(self.g, self.a),
            premultiply(self.b, self.a),
        )
    }
}

/// `component * alpha` is at most 65025, so `u16` cannot overflow.
#[inline]
const fn premultiply(component: u8, alpha: u8) -> u8 {
    ((component as u16 * alpha as u16) / 255) as u8
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<u32> for ArgbColor {
    fn from(value: u32) -> Self {
        Self::from_argb(value)
    }
}

impl From<ArgbColor> for u32 {
    fn from(color: ArgbColor) -> Self {
        color.to_argb()
    }
}

impl From<(u8, u8, u8, u8)> for ArgbColor {
    fn from((a, r, g, b): (u8, u8, u8, u8)) -> Self {
        Self::new(a, r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ArgbColor {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_argb())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ArgbColor {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        <u32 as serde::Deserialize>::deserialize(deserializer).map(Self::from_argb)
    }
}
