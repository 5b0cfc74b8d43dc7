//! Error types for canvas construction and color handling.

use thiserror::Error;

use crate::color::ColorMode;

/// Invalid color input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid color name \"{0}\"")]
    UnknownName(String),

    #[error("invalid byte color {0}, allowed values are 0..=255")]
    ByteOutOfRange(i64),

    #[error("invalid byte color \"{0}\", expected an integer in 0..=255")]
    InvalidByte(String),

    #[error("invalid hex RGB value \"{0}\"")]
    InvalidHex(String),

    #[error("RGB color needs 3 components, got {0}")]
    RgbArity(usize),

    #[error("invalid RGB component {0}, allowed values are 0..=255")]
    RgbComponentOutOfRange(i64),

    #[error("{found:?} color used with color mode {expected:?}")]
    ModeMismatch { expected: ColorMode, found: ColorMode },

    #[error("invalid color mode \"{0}\", use one of \"names\", \"byte\" or \"rgb\"")]
    UnknownMode(String),
}

/// Canvas contract violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    #[error("canvas size {width}x{height} has to be greater than 0 in both directions")]
    InvalidSize { width: usize, height: usize },

    #[error("invalid {axis} range {min}..{max}, needs finite {axis}min < {axis}max")]
    InvalidBounds { axis: char, min: f64, max: f64 },

    #[error("rectangle ({xmin}, {ymin}) - ({xmax}, {ymax}) has inverted corners")]
    InvalidRect {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error(transparent)]
    Color(#[from] ColorError),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
