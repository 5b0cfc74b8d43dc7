//! Braille canvas
//!
//! A `width` x `height` character canvas offers `width * 2` x `height * 4` dots.
//! Callers draw in a reference coordinate system with `(xmin, ymin)` in the lower
//! left and `(xmax, ymax)` in the upper right corner; the canvas maps it onto
//! dot coordinates. Anything landing outside the dot grid is silently dropped.
//!
//! Cells are stored bottom row first. Only [`Canvas::plot`] flips the order, so
//! the terminal output reads top to bottom.
//!
//! A canvas has no interior locking; mutate it from one thread at a time.

use std::fmt;
use std::ops::RangeInclusive;

use tracing::{debug, trace};
use unicode_width::UnicodeWidthChar;

use super::cell::Cell;
use crate::color::{Color, ColorMode, ColorPolicy};
use crate::error::{CanvasError, Result};
use crate::util::round_half_to_even;

/// Platform line separator used by [`Canvas::plot`].
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Luminance threshold for [`Canvas::braille_image`] on 8-bit grayscale data.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Everything about a canvas except its size
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasOptions {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    /// Background color of every cell
    pub background: Option<Color>,
    /// The mode all colors drawn on this canvas must use
    pub mode: ColorMode,
    pub policy: ColorPolicy,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 1.0,
            ymax: 1.0,
            background: None,
            mode: ColorMode::Names,
            policy: ColorPolicy::default(),
        }
    }
}

/// Drawing surface of braille characters
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
    /// Reference units per dot
    x_delta_pt: f64,
    y_delta_pt: f64,
    mode: ColorMode,
    policy: ColorPolicy,
    /// Row-major, `cells[row * width + col]`, row 0 at the bottom
    cells: Vec<Cell>,
}

impl Canvas {
    /// Canvas over the unit square `0..1 x 0..1` without colors.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_options(width, height, CanvasOptions::default())
    }

    /// Create a canvas, validating size, bounds and background color.
    pub fn with_options(width: usize, height: usize, options: CanvasOptions) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }
        check_bounds('x', options.xmin, options.xmax)?;
        check_bounds('y', options.ymin, options.ymax)?;
        if let Some(bg) = options.background {
            bg.check(options.mode)?;
        }

        let x_delta = (options.xmax - options.xmin) / width as f64;
        let y_delta = (options.ymax - options.ymin) / height as f64;

        debug!(
            width,
            height,
            xmin = options.xmin,
            ymin = options.ymin,
            xmax = options.xmax,
            ymax = options.ymax,
            mode = ?options.mode,
            "Creating canvas"
        );

        Ok(Self {
            width,
            height,
            xmin: options.xmin,
            ymin: options.ymin,
            xmax: options.xmax,
            ymax: options.ymax,
            x_delta_pt: x_delta / 2.0,
            y_delta_pt: y_delta / 4.0,
            mode: options.mode,
            policy: options.policy,
            cells: vec![Cell::with_background(options.background); width * height],
        })
    }

    /// Number of characters in x direction
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of characters in y direction
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Number of dots in x direction
    pub fn dot_width(&self) -> usize {
        self.width * 2
    }

    /// Number of dots in y direction
    pub fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Largest x still mapping onto the last dot column.
    pub fn xmax_inside(&self) -> f64 {
        self.xmin + (self.dot_width() - 1) as f64 * self.x_delta_pt
    }

    /// Largest y still mapping onto the top dot row.
    pub fn ymax_inside(&self) -> f64 {
        self.ymin + (self.dot_height() - 1) as f64 * self.y_delta_pt
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Cell at `row` (0 = bottom) and `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Reference x to dot column. Not clamped: values outside `xmin..=xmax` give
    /// columns outside the grid. NaN maps to `i64::MIN`, i.e. off the canvas.
    pub fn transform_x(&self, x: f64) -> i64 {
        to_dot((x - self.xmin) / self.x_delta_pt)
    }

    /// Reference y to dot row, see [`Canvas::transform_x`].
    pub fn transform_y(&self, y: f64) -> i64 {
        to_dot((y - self.ymin) / self.y_delta_pt)
    }

    /// Dots between `(x0, y0)` and `(x1, y1)` in x and y direction.
    pub fn dots_between(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> (i64, i64) {
        (
            self.transform_x(x1).saturating_sub(self.transform_x(x0)),
            self.transform_y(y1).saturating_sub(self.transform_y(y0)),
        )
    }

    /// (Un)set the dot at `(x, y)`. A `marker` replaces the whole character.
    pub fn point(
        &mut self,
        x: f64,
        y: f64,
        set: bool,
        color: Option<Color>,
        marker: Option<char>,
    ) -> Result<()> {
        self.check_color(color)?;
        let (x_idx, y_idx) = (self.transform_x(x), self.transform_y(y));
        self.set_dot(x_idx, y_idx, set, color, marker);
        Ok(())
    }

    /// Fill (or clear, including any marker) the character containing `(x, y)`.
    pub fn fill_char(&mut self, x: f64, y: f64, set: bool) {
        let col = self.transform_x(x).div_euclid(2);
        let row = self.transform_y(y).div_euclid(4);
        match self.cell_index(row, col) {
            Some(idx) if set => self.cells[idx].fill(),
            Some(idx) => self.cells[idx].clear(),
            None => trace!(row, col, "fill_char outside canvas"),
        }
    }

    /// (Un)set a line of dots between `(x0, y0)` and `(x1, y1)`.
    pub fn line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        set: bool,
        color: Option<Color>,
    ) -> Result<()> {
        self.check_color(color)?;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            trace!(x0, y0, x1, y1, "Skipping line with non-finite endpoint");
            return Ok(());
        }
        let start = (self.transform_x(x0), self.transform_y(y0));
        let end = (self.transform_x(x1), self.transform_y(y1));
        let extent = (self.dot_width() as i64, self.dot_height() as i64);
        for (x_idx, y_idx) in line_dots(start, end, extent) {
            self.set_dot(x_idx, y_idx, set, color, None);
        }
        Ok(())
    }

    /// Outline of the rectangle `(xmin, ymin)` - `(xmax, ymax)`.
    pub fn rect(
        &mut self,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        set: bool,
        color: Option<Color>,
    ) -> Result<()> {
        if !(xmin <= xmax && ymin <= ymax) {
            return Err(CanvasError::InvalidRect { xmin, ymin, xmax, ymax });
        }
        trace!(xmin, ymin, xmax, ymax, set, "rect");
        self.line(xmin, ymin, xmin, ymax, set, color)?;
        self.line(xmin, ymax, xmax, ymax, set, color)?;
        self.line(xmax, ymax, xmax, ymin, set, color)?;
        self.line(xmax, ymin, xmin, ymin, set, color)
    }

    /// Write `text` as markers, one character per cell, starting at the cell
    /// containing `(x, y)` and cut off at the right border.
    ///
    /// Unsetting removes the markers of the same span; the dots underneath show
    /// again. Zero width characters are skipped.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        set: bool,
        color: Option<Color>,
    ) -> Result<()> {
        self.check_color(color)?;
        let start_col = self.transform_x(x).div_euclid(2);
        let row = self.transform_y(y).div_euclid(4);

        let printable = text.chars().filter(|c| matches!(c.width(), Some(w) if w > 0));
        for (offset, ch) in printable.enumerate() {
            let col = start_col.saturating_add(offset as i64);
            if col >= self.width as i64 {
                break;
            }
            let Some(idx) = self.cell_index(row, col) else {
                continue;
            };
            let cell = &mut self.cells[idx];
            cell.set_marker(set.then_some(ch));
            apply_fg(cell, set, color);
        }
        Ok(())
    }

    /// Paint cell backgrounds from `pixels`, given top row first, `width`
    /// pixels per row. `None` pixels are left untouched; unsetting removes the
    /// background of every `Some` pixel.
    pub fn image(&mut self, pixels: &[Option<Color>], set: bool) -> Result<()> {
        for color in pixels.iter().flatten() {
            self.check_color(Some(*color))?;
        }
        trace!(pixels = pixels.len(), set, "image");

        let cells = self.width * self.height;
        for (idx, pixel) in pixels.iter().enumerate().take(cells) {
            let Some(color) = pixel else {
                continue;
            };
            let row = self.height - idx / self.width - 1;
            let col = idx % self.width;
            self.cells[row * self.width + col].set_bg(set.then_some(*color));
        }
        Ok(())
    }

    /// Draw a bitmap with one value per dot (`dot_width` values per row, top row
    /// first). A dot is drawn where `value >= threshold`, or where it is below
    /// when `inverse` is set.
    pub fn braille_image<T: PartialOrd>(
        &mut self,
        pixels: &[T],
        threshold: T,
        inverse: bool,
        color: Option<Color>,
        set: bool,
    ) -> Result<()> {
        self.check_color(color)?;
        let row_size = self.dot_width();
        let dot_height = self.dot_height() as i64;

        for (idx, value) in pixels.iter().enumerate() {
            if (*value >= threshold) == inverse {
                continue;
            }
            let y_idx = dot_height - (idx / row_size) as i64 - 1;
            let x_idx = (idx % row_size) as i64;
            self.set_dot(x_idx, y_idx, set, color, None);
        }
        Ok(())
    }

    /// Render using the platform line separator.
    pub fn plot(&self) -> String {
        self.plot_with(LINE_SEPARATOR)
    }

    /// Render the canvas, top row first, rows joined by `linesep`.
    pub fn plot_with(&self, linesep: &str) -> String {
        debug!(width = self.width, height = self.height, "Rendering canvas");
        self.cells
            .chunks(self.width)
            .rev()
            .map(|row| row.iter().map(|cell| cell.render(&self.policy)).collect::<String>())
            .collect::<Vec<_>>()
            .join(linesep)
    }

    fn check_color(&self, color: Option<Color>) -> Result<()> {
        if let Some(color) = color {
            color.check(self.mode)?;
        }
        Ok(())
    }

    /// Index into `cells`, `None` when outside the grid.
    fn cell_index(&self, row: i64, col: i64) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Write one dot given in dot coordinates.
    fn set_dot(
        &mut self,
        x_idx: i64,
        y_idx: i64,
        set: bool,
        color: Option<Color>,
        marker: Option<char>,
    ) {
        let (col, x_sub) = (x_idx.div_euclid(2), x_idx.rem_euclid(2));
        let (row, y_sub) = (y_idx.div_euclid(4), y_idx.rem_euclid(4));

        let Some(idx) = self.cell_index(row, col) else {
            trace!(x_idx, y_idx, "Dot outside canvas");
            return;
        };
        let cell = &mut self.cells[idx];
        cell.update(x_sub as usize, y_sub as usize, set, marker);
        apply_fg(cell, set, color);
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Canvas(width={}, height={}, xmin={}, ymin={}, xmax={}, ymax={})",
            self.width, self.height, self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

/// Both limits finite, ordered, and with a finite span.
fn check_bounds(axis: char, min: f64, max: f64) -> Result<()> {
    if min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(CanvasError::InvalidBounds { axis, min, max })
    }
}

fn to_dot(v: f64) -> i64 {
    if v.is_nan() {
        i64::MIN
    } else {
        // saturating for values beyond i64
        round_half_to_even(v) as i64
    }
}

/// Setting a color paints the foreground; unsetting with the cell's current
/// foreground removes it.
fn apply_fg(cell: &mut Cell, set: bool, color: Option<Color>) {
    if let Some(color) = color {
        if set {
            cell.set_fg(Some(color));
        } else {
            cell.clear_fg_if(&color);
        }
    }
}

/// Dots from `start` to `end` inclusive, stepping along the dominant axis so
/// consecutive dots are 8-connected.
///
/// Only steps whose dominant coordinate lies in `-1..=extent` are produced, so
/// the work is bounded by the grid size and not by the distance to an endpoint.
/// Nothing is produced when both endpoints are beyond the same grid border.
fn line_dots(
    start: (i64, i64),
    end: (i64, i64),
    extent: (i64, i64),
) -> impl Iterator<Item = (i64, i64)> {
    let (x0, y0) = start;
    let x_diff = end.0.saturating_sub(x0);
    let y_diff = end.1.saturating_sub(y0);
    let steps = x_diff.unsigned_abs().max(y_diff.unsigned_abs());

    let beyond = |a: i64, b: i64, max: i64| (a < 0 && b < 0) || (a >= max && b >= max);
    let visible = if beyond(x0, end.0, extent.0) || beyond(y0, end.1, extent.1) {
        1..=0
    } else if x_diff.unsigned_abs() >= y_diff.unsigned_abs() {
        visible_steps(x0, x_diff.signum(), steps, extent.0)
    } else {
        visible_steps(y0, y_diff.signum(), steps, extent.1)
    };

    visible.map(move |i| {
        if i == 0 {
            start
        } else if i == steps {
            end
        } else {
            let xb = round_half_to_even(x_diff as f64 / steps as f64 * i as f64) as i64;
            let yb = round_half_to_even(y_diff as f64 / steps as f64 * i as f64) as i64;
            (x0.saturating_add(xb), y0.saturating_add(yb))
        }
    })
}

/// Step indices in `0..=steps` where `c0 + sign * i` lies in `-1..=max`. The
/// dominant axis moves exactly one dot per step.
fn visible_steps(c0: i64, sign: i64, steps: u64, max: i64) -> RangeInclusive<u64> {
    let (c0, max, steps) = (i128::from(c0), i128::from(max), i128::from(steps));
    let (lo, hi) = match sign {
        1 => (-1 - c0, max - c0),
        -1 => (c0 - max, c0 + 1),
        _ => (0, 0),
    };
    let (lo, hi) = (lo.max(0), hi.min(steps));
    if lo > hi {
        return 1..=0;
    }
    // both within 0..=steps, which fits u64
    (lo as u64)..=(hi as u64)
}
