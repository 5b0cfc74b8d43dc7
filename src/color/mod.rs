//! ANSI coloring.
//!
//! - **ansi**: color values, SGR escape codes and `colorize`
//! - **policy**: decides once whether color is emitted at all
//! - **convert**: hex parsing, HSL and RGB to 256-color quantization
//!
//! Three color modes are supported:
//!
//! | Mode | Encoding | Example fg |
//! |------|----------|------------|
//! | `names` | 3/4 bit | `\x1b[31m` |
//! | `byte` | 8 bit palette | `\x1b[38;5;196m` |
//! | `rgb` | 24 bit | `\x1b[38;2;255;0;0m` |

pub mod ansi;
pub mod convert;
pub mod policy;

pub use ansi::{colorize, paint, Color, ColorMode, NamedColor};
pub use convert::{hsl, parse_hex, rgb_to_byte};
pub use policy::{ColorPolicy, Reset};
