//! A single character cell of the canvas.

use super::dots::Dots;
use crate::color::{paint, Color, ColorPolicy};

/// Renderable state of one character position
///
/// A marker replaces the braille glyph on output, but the dots underneath are
/// kept: removing the marker shows them again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    dots: Dots,
    marker: Option<char>,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Cell {
    pub fn with_background(bg: Option<Color>) -> Self {
        Self {
            bg,
            ..Self::default()
        }
    }

    pub fn dots(&self) -> Dots {
        self.dots
    }

    pub fn marker(&self) -> Option<char> {
        self.marker
    }

    pub fn fg(&self) -> Option<Color> {
        self.fg
    }

    pub fn bg(&self) -> Option<Color> {
        self.bg
    }

    pub fn set_marker(&mut self, marker: Option<char>) {
        self.marker = marker;
    }

    pub fn set_fg(&mut self, fg: Option<Color>) {
        self.fg = fg;
    }

    pub fn set_bg(&mut self, bg: Option<Color>) {
        self.bg = bg;
    }

    /// Set all 8 dots.
    pub fn fill(&mut self) {
        self.dots = Dots::all();
    }

    /// Remove all dots and the marker. Colors stay.
    pub fn clear(&mut self) {
        self.dots = Dots::empty();
        self.marker = None;
    }

    /// (Un)set the dot at sub-cell position `x` in `0..2`, `y` in `0..4`, with
    /// `(0, 0)` the lower left dot.
    ///
    /// Setting installs `marker` if one is given. Unsetting always drops the
    /// marker, whichever dot was addressed.
    pub fn update(&mut self, x: usize, y: usize, set: bool, marker: Option<char>) {
        let dot = Dots::at(x, y);
        if set {
            self.dots.insert(dot);
            if marker.is_some() {
                self.marker = marker;
            }
        } else {
            self.dots.remove(dot);
            self.marker = None;
        }
    }

    /// Drop the foreground if it is `color`.
    pub fn clear_fg_if(&mut self, color: &Color) {
        if self.fg.as_ref() == Some(color) {
            self.fg = None;
        }
    }

    /// Character shown for this cell, ignoring colors.
    pub fn glyph(&self) -> char {
        self.marker.unwrap_or_else(|| self.dots.glyph())
    }

    /// Glyph wrapped in color escape sequences as allowed by `policy`.
    pub fn render(&self, policy: &ColorPolicy) -> String {
        let mut buf = [0u8; 4];
        let glyph = self.glyph().encode_utf8(&mut buf);
        paint(glyph, self.fg.as_ref(), self.bg.as_ref(), policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn test_update() {
        let mut cell = Cell::default();
        assert_eq!(cell.dots().indices(), Vec::<u8>::new());

        let steps = [
            ((0, 0), vec![7]),
            ((1, 0), vec![7, 8]),
            ((1, 0), vec![7, 8]),
            ((0, 1), vec![3, 7, 8]),
            ((1, 1), vec![3, 6, 7, 8]),
            ((0, 2), vec![2, 3, 6, 7, 8]),
            ((1, 2), vec![2, 3, 5, 6, 7, 8]),
            ((0, 3), vec![1, 2, 3, 5, 6, 7, 8]),
            ((1, 3), vec![1, 2, 3, 4, 5, 6, 7, 8]),
        ];
        for ((x, y), expected) in steps {
            cell.update(x, y, true, None);
            assert_eq!(cell.dots().indices(), expected);
        }

        cell.clear();
        assert_eq!(cell.dots(), Dots::empty());
        cell.fill();
        assert_eq!(cell.glyph(), '⣿');
    }

    #[test]
    fn test_unset() {
        let mut cell = Cell::default();
        cell.fill();
        cell.update(0, 0, false, None);
        assert_eq!(cell.dots().indices(), vec![1, 2, 3, 4, 5, 6, 8]);
        cell.update(0, 0, false, None);
        assert_eq!(cell.dots().indices(), vec![1, 2, 3, 4, 5, 6, 8]);
        cell.update(1, 0, false, None);
        assert_eq!(cell.dots().indices(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_markers() {
        let mut cell = Cell::default();
        cell.update(0, 0, true, Some('o'));
        assert_eq!(cell.dots().indices(), vec![7]);
        assert_eq!(cell.glyph(), 'o');

        // any unset removes the marker, even for a dot that was never set
        cell.update(1, 3, false, None);
        assert_eq!(cell.marker(), None);
        assert_eq!(cell.glyph(), '⡀');

        cell.update(0, 0, true, Some('x'));
        assert_eq!(cell.glyph(), 'x');
        cell.set_marker(None);
        assert_eq!(cell.glyph(), '⡀');

        cell.set_marker(Some('x'));
        cell.clear();
        assert_eq!(cell.glyph(), '⠀');
    }

    #[test]
    fn test_render_colors() {
        let on = ColorPolicy::forced();
        let mut cell = Cell::with_background(Some(NamedColor::Black.into()));
        assert_eq!(cell.render(&on), "\x1b[40m⠀\x1b[0m");

        cell.set_fg(Some(NamedColor::Red.into()));
        cell.update(0, 0, true, None);
        assert_eq!(cell.render(&on), "\x1b[31;40m⡀\x1b[0m");
        assert_eq!(cell.render(&ColorPolicy::disabled()), "⡀");

        cell.clear_fg_if(&NamedColor::Blue.into());
        assert_eq!(cell.fg(), Some(NamedColor::Red.into()));
        cell.clear_fg_if(&NamedColor::Red.into());
        assert_eq!(cell.fg(), None);
    }
}
