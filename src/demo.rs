//! Demo plots for the termdots binary.
//!
//! Every demo only goes through the public [`Canvas`] API and picks its colors
//! for the configured [`ColorMode`]:
//! - names: the base terminal colors
//! - byte: hsl hues reduced to the 256-color palette
//! - rgb: hsl hues as true color

use std::fmt;
use std::str::FromStr;

use crate::color::{hsl, rgb_to_byte, Color, ColorMode, ColorPolicy, NamedColor};
use crate::core::{Canvas, CanvasOptions, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::util::hist;

/// Available demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Sine,
    House,
    Markers,
    Hist,
    Image,
    Braille,
    All,
}

impl Demo {
    /// Every single demo, in the order `All` renders them.
    pub const SINGLE: [Demo; 6] = [
        Demo::Sine,
        Demo::House,
        Demo::Markers,
        Demo::Hist,
        Demo::Image,
        Demo::Braille,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Sine => "sine",
            Demo::House => "house",
            Demo::Markers => "markers",
            Demo::Hist => "hist",
            Demo::Image => "image",
            Demo::Braille => "braille",
            Demo::All => "all",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::SINGLE
            .iter()
            .chain(std::iter::once(&Demo::All))
            .copied()
            .find(|d| d.name() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("Unknown demo: {s}"))
    }
}

/// Rendering parameters shared by all demos
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub width: usize,
    pub height: usize,
    pub mode: ColorMode,
    pub policy: ColorPolicy,
    pub line_separator: String,
}

/// Render `demo`. `All` renders every demo, separated by a blank line.
pub fn render(demo: Demo, options: &DemoOptions) -> Result<String> {
    let sep = options.line_separator.as_str();
    match demo {
        Demo::Sine => sine(options),
        Demo::House => house(options),
        Demo::Markers => markers(options),
        Demo::Hist => histogram(options),
        Demo::Image => image(options),
        Demo::Braille => braille(options),
        Demo::All => {
            let plots = Demo::SINGLE
                .iter()
                .map(|&d| render(d, options))
                .collect::<Result<Vec<_>>>()?;
            Ok(plots.join(&format!("{sep}{sep}")))
        }
    }
}

/// The `index`-th demo color in `mode`.
fn palette(mode: ColorMode, index: usize) -> Color {
    const NAMES: [NamedColor; 6] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
    ];
    match mode {
        ColorMode::Names => NAMES[index % NAMES.len()].into(),
        ColorMode::Byte | ColorMode::Rgb => heat(mode, index as f64 / NAMES.len() as f64),
    }
}

/// Map `t` in `0..=1` from blue to red.
fn heat(mode: ColorMode, t: f64) -> Color {
    let color = hsl(240.0 * (1.0 - t.clamp(0.0, 1.0)), 1.0, 0.5);
    match (mode, color) {
        (ColorMode::Byte, Color::Rgb(r, g, b)) => Color::Byte(rgb_to_byte(r, g, b)),
        (ColorMode::Names, _) => {
            let hot = [
                NamedColor::Blue,
                NamedColor::Cyan,
                NamedColor::Green,
                NamedColor::Yellow,
                NamedColor::Red,
            ];
            hot[((t.clamp(0.0, 1.0) * 4.0).round() as usize).min(4)].into()
        }
        _ => color,
    }
}

fn canvas(options: &DemoOptions, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Canvas> {
    Canvas::with_options(
        options.width,
        options.height,
        CanvasOptions {
            xmin,
            ymin,
            xmax,
            ymax,
            background: None,
            mode: options.mode,
            policy: options.policy,
        },
    )
}

fn sine(options: &DemoOptions) -> Result<String> {
    let tau = std::f64::consts::TAU;
    let mut c = canvas(options, 0.0, -1.2, tau, 1.2)?;

    // axes
    c.line(0.0, 0.0, tau, 0.0, true, None)?;
    c.line(0.0, -1.2, 0.0, 1.2, true, None)?;

    let samples = c.dot_width().max(2);
    let step = tau / (samples - 1) as f64;
    let curves: [(fn(f64) -> f64, usize); 2] = [(f64::sin, 0), (f64::cos, 3)];
    for (f, color) in curves {
        let color = Some(palette(options.mode, color));
        for i in 1..samples {
            let (x0, x1) = ((i - 1) as f64 * step, i as f64 * step);
            c.line(x0, f(x0), x1, f(x1), true, color)?;
        }
    }

    let y_label = c.ymax_inside();
    c.text(0.2, y_label, "sin", true, Some(palette(options.mode, 0)))?;
    c.text(0.2 + tau / 8.0, y_label, "cos", true, Some(palette(options.mode, 3)))?;
    Ok(c.plot_with(&options.line_separator))
}

fn house(options: &DemoOptions) -> Result<String> {
    let mut c = canvas(options, 0.0, 0.0, 1.0, 1.0)?;
    c.rect(0.1, 0.1, 0.6, 0.6, true, None)?;
    c.line(0.1, 0.1, 0.6, 0.6, true, None)?;
    c.line(0.1, 0.6, 0.6, 0.1, true, None)?;
    c.line(0.1, 0.6, 0.35, 0.8, true, None)?;
    c.line(0.35, 0.8, 0.6, 0.6, true, None)?;
    c.text(0.3, 0.5, "hi", true, Some(palette(options.mode, 0)))?;
    c.point(0.35, 0.35, true, Some(palette(options.mode, 3)), None)?;
    c.fill_char(0.35, 0.1, true);
    Ok(c.plot_with(&options.line_separator))
}

fn markers(options: &DemoOptions) -> Result<String> {
    let mut c = canvas(options, 0.0, 0.0, 10.0, 10.0)?;
    let points = [
        (1.0, 2.0, 'x'),
        (3.0, 7.0, 'o'),
        (5.0, 4.0, '*'),
        (7.0, 8.5, '+'),
        (9.0, 1.5, '#'),
    ];
    for (i, &(x, y, marker)) in points.iter().enumerate() {
        c.point(x, y, true, Some(palette(options.mode, i)), Some(marker))?;
        c.text(x + 0.5, y, &format!("({x}, {y})"), true, None)?;
    }
    let (right, top) = (c.xmax_inside(), c.ymax_inside());
    c.rect(0.0, 0.0, right, top, true, None)?;
    Ok(c.plot_with(&options.line_separator))
}

fn histogram(options: &DemoOptions) -> Result<String> {
    // deterministic bell shaped sample
    let values: Vec<f64> = (0..500)
        .map(|i| {
            let t = i as f64 / 500.0;
            (t * 97.0).sin() + (t * 53.0).cos() + (t * 11.0).sin()
        })
        .collect();
    let bins = options.width.max(1);
    let (counts, edges) = hist(&values, bins);
    let top = counts.iter().copied().max().unwrap_or(1).max(1) as f64;

    let (xmin, xmax) = (edges[0], edges[bins]);
    let xmax = if xmax > xmin { xmax } else { xmin + 1.0 };
    let mut c = canvas(options, xmin, 0.0, xmax, top)?;
    let width = (xmax - xmin) / bins as f64;

    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let left = xmin + i as f64 * width;
        let (dots_x, _) = c.dots_between(left, 0.0, left + width, 0.0);
        let color = Some(heat(options.mode, count as f64 / top));
        // one vertical line per dot column of the bar
        for dx in 0..dots_x.max(1) {
            let x = left + dx as f64 * width / dots_x.max(1) as f64;
            c.line(x, 0.0, x, count as f64, true, color)?;
        }
    }
    Ok(c.plot_with(&options.line_separator))
}

fn image(options: &DemoOptions) -> Result<String> {
    let mut c = canvas(options, 0.0, 0.0, 1.0, 1.0)?;
    let (w, h) = (options.width, options.height);
    let pixels: Vec<Option<Color>> = (0..w * h)
        .map(|idx| {
            let (x, y) = ((idx % w) as f64 / w as f64, (idx / w) as f64 / h as f64);
            let r = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt();
            (r < 0.5).then(|| heat(options.mode, 1.0 - 2.0 * r))
        })
        .collect();
    c.image(&pixels, true)?;
    Ok(c.plot_with(&options.line_separator))
}

fn braille(options: &DemoOptions) -> Result<String> {
    let mut c = canvas(options, 0.0, 0.0, 1.0, 1.0)?;
    let (w, h) = (c.dot_width(), c.dot_height());
    // 8-bit luminance of concentric rings
    let pixels: Vec<u8> = (0..w * h)
        .map(|idx| {
            let x = (idx % w) as f64 / w as f64 - 0.5;
            let y = (idx / w) as f64 / h as f64 - 0.5;
            let r = (x * x + y * y).sqrt();
            ((r * 40.0).sin() * 127.5 + 127.5) as u8
        })
        .collect();
    c.braille_image(&pixels, DEFAULT_THRESHOLD, false, Some(palette(options.mode, 5)), true)?;
    Ok(c.plot_with(&options.line_separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(mode: ColorMode) -> DemoOptions {
        DemoOptions {
            width: 40,
            height: 12,
            mode,
            policy: ColorPolicy::disabled(),
            line_separator: "\n".to_string(),
        }
    }

    #[test]
    fn test_parse_demo() {
        assert_eq!("sine".parse::<Demo>(), Ok(Demo::Sine));
        assert_eq!("ALL".parse::<Demo>(), Ok(Demo::All));
        assert!("pie".parse::<Demo>().is_err());
        for demo in Demo::SINGLE {
            assert_eq!(demo.name().parse::<Demo>(), Ok(demo));
        }
    }

    #[test]
    fn test_every_demo_every_mode() {
        for mode in [ColorMode::Names, ColorMode::Byte, ColorMode::Rgb] {
            for demo in Demo::SINGLE {
                let out = render(demo, &options(mode)).unwrap();
                let lines: Vec<&str> = out.split('\n').collect();
                assert_eq!(lines.len(), 12, "{demo} in {mode:?}");
                assert!(lines.iter().all(|l| l.chars().count() == 40), "{demo} in {mode:?}");
            }
        }
    }

    #[test]
    fn test_all() {
        let out = render(Demo::All, &options(ColorMode::Names)).unwrap();
        assert_eq!(out.split("\n\n").count(), Demo::SINGLE.len());
    }

    #[test]
    fn test_palette_matches_mode() {
        for mode in [ColorMode::Names, ColorMode::Byte, ColorMode::Rgb] {
            for i in 0..8 {
                assert_eq!(palette(mode, i).mode(), mode);
                assert_eq!(heat(mode, i as f64 / 7.0).mode(), mode);
            }
        }
    }

    #[test]
    fn test_colored_output() {
        let mut opts = options(ColorMode::Names);
        opts.policy = ColorPolicy::forced();
        let out = render(Demo::House, &opts).unwrap();
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("\x1b[0m"));
    }
}
