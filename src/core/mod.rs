//! Braille drawing core.
//!
//! - **dots**: conversion between dot sets and braille code points
//! - **cell**: one character cell (dots, marker, colors)
//! - **canvas**: grid of cells with reference-to-dot coordinate mapping
//!
//! # Architecture
//!
//! ```text
//! Canvas
//! ├── reference space (xmin..xmax, ymin..ymax, f64)
//! ├── dot space (width*2 x height*4, i64)
//! └── cells: Vec<Cell> (row-major, row 0 = bottom)
//!     └── Cell
//!         ├── Dots (8-bit mask)
//!         ├── marker (overrides braille glyph)
//!         └── fg / bg colors
//! ```

pub mod canvas;
pub mod cell;
pub mod dots;

pub use canvas::{Canvas, CanvasOptions, DEFAULT_THRESHOLD, LINE_SEPARATOR};
pub use cell::Cell;
pub use dots::{decode, encode, Dots, BRAILLE_BASE, BRAILLE_BLANK};
