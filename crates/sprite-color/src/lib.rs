//! Packed ARGB colors for desktop sprites.
//!
//! - [`color`]: the immutable [`ArgbColor`] value with packing, alpha
//!   premultiplication and hex conversion
//! - [`rgb`]: the alpha-less [`RgbColor`]
//! - [`error`]: error types for hex parsing
//!
//! # Examples
//!
//! ```
//! use sprite_color::{ArgbColor, RgbColor};
//!
//! let sky = ArgbColor::from_rgb(200, RgbColor::new(10, 20, 30));
//! assert_eq!(sky.to_argb(), 0xC80A_141E);
//! assert_eq!(sky.to_string(), "ArgbColor [A=200, R=10, G=20, B=30]");
//!
//! // Dropping alpha is always spelled out.
//! let rgb = sky.to_rgb();
//! assert_eq!(rgb, RgbColor::new(10, 20, 30));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod error;
pub mod rgb;

pub use color::ArgbColor;
pub use error::{ColorParseError, Result};
pub use rgb::RgbColor;
