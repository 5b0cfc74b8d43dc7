//! Braille dot encoding
//!
//! Dots are numbered according to ISO/TR 11548-1. Dot `i` maps to bit `i - 1`
//! of the offset from `U+2800`:
//!
//! ```text
//! 1  4
//! 2  5
//! 3  6
//! 7  8
//! ```

use bitflags::bitflags;

/// First code point of the braille block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille character with no dots set.
pub const BRAILLE_BLANK: char = '\u{2800}';

/// Sub-cell `(x, y)` to dot number. Row `y = 0` is the bottom of the cell, since
/// the canvas plots upside down.
const XY_TO_DOT: [[u8; 2]; 4] = [
    [7, 8],
    [3, 6],
    [2, 5],
    [1, 4],
];

bitflags! {
    /// Set of dots in one braille character.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Dots: u8 {
        const DOT_1 = 0b0000_0001;
        const DOT_2 = 0b0000_0010;
        const DOT_3 = 0b0000_0100;
        const DOT_4 = 0b0000_1000;
        const DOT_5 = 0b0001_0000;
        const DOT_6 = 0b0010_0000;
        const DOT_7 = 0b0100_0000;
        const DOT_8 = 0b1000_0000;
    }
}

impl Dots {
    /// Flag for dot number `index` (1-8).
    pub fn from_index(index: u8) -> Option<Self> {
        if (1..=8).contains(&index) {
            Some(Self::from_bits_retain(1 << (index - 1)))
        } else {
            None
        }
    }

    /// Flag for the sub-cell position `x` in `0..2`, `y` in `0..4` (bottom up).
    /// Positions outside the cell yield no dot.
    pub fn at(x: usize, y: usize) -> Self {
        XY_TO_DOT
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&index| Self::from_index(index))
            .unwrap_or_else(Self::empty)
    }

    /// Dot numbers that are set, ascending.
    pub fn indices(self) -> Vec<u8> {
        (1..=8)
            .filter(|&i| Self::from_index(i).is_some_and(|d| self.contains(d)))
            .collect()
    }

    /// The braille character showing exactly these dots.
    pub fn glyph(self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.bits())).unwrap_or(BRAILLE_BLANK)
    }
}

/// Braille character with the given dots set.
///
/// Dot numbers must be in `1..=8`. Debug builds panic on anything else; release
/// builds ignore the offending entries.
pub fn encode(dots: &[u8]) -> char {
    let mut set = Dots::empty();
    for &index in dots {
        debug_assert!((1..=8).contains(&index), "dot {index} outside 1..=8");
        if let Some(dot) = Dots::from_index(index) {
            set |= dot;
        }
    }
    set.glyph()
}

/// Dot numbers set in a braille character, ascending. `None` if `braille` is not
/// in `U+2800..=U+28FF`.
pub fn decode(braille: char) -> Option<Vec<u8>> {
    let offset = u32::from(braille).checked_sub(BRAILLE_BASE)?;
    let bits = u8::try_from(offset).ok()?;
    Some(Dots::from_bits_retain(bits).indices())
}
