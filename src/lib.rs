//! termdots - plot data in the terminal with braille dots
//!
//! Every braille character (`U+2800` - `U+28FF`) holds a 2x4 grid of dots, so a
//! canvas of `width` x `height` characters offers `width * 2` x `height * 4`
//! addressable dots. Callers draw in their own continuous coordinate system and
//! the canvas maps it onto the dot grid.
//!
//! # Quick Start
//!
//! ```
//! use termdots::{Canvas, CanvasOptions, ColorPolicy};
//!
//! let mut canvas = Canvas::with_options(20, 5, CanvasOptions {
//!     xmax: 10.0,
//!     ymax: 10.0,
//!     policy: ColorPolicy::disabled(),
//!     ..CanvasOptions::default()
//! })
//! .unwrap();
//! canvas.line(0.0, 0.0, 10.0, 10.0, true, None).unwrap();
//! println!("{}", canvas.plot());
//! ```
//!
//! # Modules
//!
//! - **core**: dot encoding, cells and the canvas itself
//! - **color**: ANSI escape generation and color suppression policy
//! - **config**: TOML configuration used by the `termdots` binary
//! - **demo**: sample plots built only from the canvas drawing interface

pub mod color;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod util;

pub use crate::color::{
    colorize, hsl, rgb_to_byte, Color, ColorMode, ColorPolicy, NamedColor, Reset,
};
pub use crate::core::{decode, encode, Canvas, CanvasOptions, Cell, Dots, BRAILLE_BLANK};
pub use crate::error::{CanvasError, ColorError};
