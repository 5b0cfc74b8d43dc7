//! Color values and ANSI SGR sequences
//!
//! A [`Color`] carries its own encoding tag. A canvas (or a `colorize` call) is
//! configured with one [`ColorMode`] and rejects colors tagged for another mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::convert::parse_hex;
use super::policy::ColorPolicy;
use crate::error::ColorError;

/// Color input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 3/4 bit colors given by name
    #[default]
    Names,
    /// 8 bit palette index
    Byte,
    /// 24 bit true color
    Rgb,
}

impl FromStr for ColorMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" => Ok(ColorMode::Names),
            "byte" => Ok(ColorMode::Byte),
            "rgb" => Ok(ColorMode::Rgb),
            _ => Err(ColorError::UnknownMode(s.to_string())),
        }
    }
}

/// The 16 named terminal colors. The eight `Bright*` variants are rendered with
/// the bold attribute in the foreground and the 100-107 range in the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BrightBlack => "bright_black",
            NamedColor::BrightRed => "bright_red",
            NamedColor::BrightGreen => "bright_green",
            NamedColor::BrightYellow => "bright_yellow",
            NamedColor::BrightBlue => "bright_blue",
            NamedColor::BrightMagenta => "bright_magenta",
            NamedColor::BrightCyan => "bright_cyan",
            NamedColor::BrightWhite => "bright_white",
        }
    }

    /// Position within the base eight colors (0 = black .. 7 = white).
    fn offset(self) -> u8 {
        (Self::ALL.iter().position(|&c| c == self).unwrap_or(0) % 8) as u8
    }

    fn is_bright(self) -> bool {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0) >= 8
    }

    fn fg_code(self) -> String {
        if self.is_bright() {
            format!("1;{}", 30 + self.offset())
        } else {
            format!("{}", 30 + self.offset())
        }
    }

    fn bg_code(self) -> String {
        if self.is_bright() {
            format!("{}", 100 + self.offset())
        } else {
            format!("{}", 40 + self.offset())
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }
}

/// A color in one of the three encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Byte(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// The color mode this value belongs to.
    pub fn mode(&self) -> ColorMode {
        match self {
            Color::Named(_) => ColorMode::Names,
            Color::Byte(_) => ColorMode::Byte,
            Color::Rgb(..) => ColorMode::Rgb,
        }
    }

    /// Reject colors tagged for a mode other than `mode`.
    pub fn check(&self, mode: ColorMode) -> Result<(), ColorError> {
        if self.mode() == mode {
            Ok(())
        } else {
            Err(ColorError::ModeMismatch {
                expected: mode,
                found: self.mode(),
            })
        }
    }

    /// Palette index from an unchecked integer.
    pub fn from_byte(value: i64) -> Result<Self, ColorError> {
        u8::try_from(value)
            .map(Color::Byte)
            .map_err(|_| ColorError::ByteOutOfRange(value))
    }

    /// True color from a slice that must hold exactly three values in `0..=255`.
    pub fn from_rgb_slice(values: &[i64]) -> Result<Self, ColorError> {
        let [r, g, b] = values else {
            return Err(ColorError::RgbArity(values.len()));
        };
        let channel = |v: i64| u8::try_from(v).map_err(|_| ColorError::RgbComponentOutOfRange(v));
        Ok(Color::Rgb(channel(*r)?, channel(*g)?, channel(*b)?))
    }

    /// True color from `fff`, `ffffff`, `#ffffff` or `0xffffff`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let (r, g, b) = parse_hex(hex)?;
        Ok(Color::Rgb(r, g, b))
    }

    /// Parse textual input for the given mode: a color name, a palette index or
    /// a hex string.
    pub fn parse(s: &str, mode: ColorMode) -> Result<Self, ColorError> {
        match mode {
            ColorMode::Names => s.parse().map(Color::Named),
            ColorMode::Byte => {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ColorError::InvalidByte(s.to_string()))?;
                Self::from_byte(value)
            }
            ColorMode::Rgb => Self::from_hex(s),
        }
    }

    fn fg_code(&self) -> String {
        match self {
            Color::Named(name) => name.fg_code(),
            Color::Byte(index) => format!("38;5;{index}"),
            Color::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    fn bg_code(&self) -> String {
        match self {
            Color::Named(name) => name.bg_code(),
            Color::Byte(index) => format!("48;5;{index}"),
            Color::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(name: NamedColor) -> Self {
        Color::Named(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{name}"),
            Color::Byte(index) => write!(f, "{index}"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Opening SGR sequence for the given colors, empty if both are `None`.
pub fn sgr_start(fg: Option<&Color>, bg: Option<&Color>) -> String {
    let codes: Vec<String> = fg
        .map(Color::fg_code)
        .into_iter()
        .chain(bg.map(Color::bg_code))
        .collect();
    if codes.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", codes.join(";"))
    }
}

/// Wrap `text` in escape sequences without checking colors against a mode.
pub fn paint(text: &str, fg: Option<&Color>, bg: Option<&Color>, policy: &ColorPolicy) -> String {
    if !policy.enabled() || (fg.is_none() && bg.is_none()) {
        return text.to_string();
    }
    format!("{}{}{}", sgr_start(fg, bg), text, policy.reset().sequence())
}

/// Surround `text` with control sequences for the given colors.
///
/// Both colors must belong to `mode`. With neither color given, or with color
/// disabled by `policy`, `text` is returned unchanged. Colored output always
/// ends with the policy's reset sequence.
pub fn colorize(
    text: &str,
    fg: Option<Color>,
    bg: Option<Color>,
    mode: ColorMode,
    policy: &ColorPolicy,
) -> Result<String, ColorError> {
    for color in fg.iter().chain(bg.iter()) {
        color.check(mode)?;
    }
    Ok(paint(text, fg.as_ref(), bg.as_ref(), policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Reset;

    const BASE: [&str; 8] = ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"];

    #[test]
    fn test_names() {
        let on = ColorPolicy::forced();
        for (i, fg) in BASE.iter().enumerate() {
            let fg_name: NamedColor = fg.parse().unwrap();
            let bright_fg: NamedColor = format!("bright_{fg}").parse().unwrap();
            assert_eq!(sgr_start(Some(&fg_name.into()), None), format!("\x1b[{}m", 30 + i));
            assert_eq!(sgr_start(Some(&bright_fg.into()), None), format!("\x1b[1;{}m", 30 + i));
            assert_eq!(
                colorize(" ", Some(fg_name.into()), None, ColorMode::Names, &on).unwrap(),
                format!("\x1b[{}m \x1b[0m", 30 + i)
            );

            for (j, bg) in BASE.iter().enumerate() {
                let bg_name: NamedColor = bg.parse().unwrap();
                let bright_bg: NamedColor = format!("bright_{bg}").parse().unwrap();
                assert_eq!(sgr_start(None, Some(&bg_name.into())), format!("\x1b[{}m", 40 + j));
                assert_eq!(sgr_start(None, Some(&bright_bg.into())), format!("\x1b[{}m", 100 + j));
                assert_eq!(
                    colorize(
                        " ",
                        Some(bright_fg.into()),
                        Some(bright_bg.into()),
                        ColorMode::Names,
                        &on
                    )
                    .unwrap(),
                    format!("\x1b[1;{};{}m \x1b[0m", 30 + i, 100 + j)
                );
            }
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "olive".parse::<NamedColor>(),
            Err(ColorError::UnknownName("olive".to_string()))
        );
        assert_eq!("Bright-Red".parse::<NamedColor>(), Ok(NamedColor::BrightRed));
    }

    #[test]
    fn test_bytes() {
        let on = ColorPolicy::forced();
        assert_eq!(sgr_start(Some(&Color::Byte(0)), Some(&Color::Byte(0))), "\x1b[38;5;0;48;5;0m");
        for i in [0u8, 15, 16, 231, 255] {
            assert_eq!(
                colorize(" ", Some(Color::Byte(i)), None, ColorMode::Byte, &on).unwrap(),
                format!("\x1b[38;5;{i}m \x1b[0m")
            );
            assert_eq!(
                colorize(" ", None, Some(Color::Byte(i)), ColorMode::Byte, &on).unwrap(),
                format!("\x1b[48;5;{i}m \x1b[0m")
            );
        }
        assert_eq!(Color::from_byte(-15), Err(ColorError::ByteOutOfRange(-15)));
        assert_eq!(Color::from_byte(256), Err(ColorError::ByteOutOfRange(256)));
        assert_eq!(
            Color::parse("25x", ColorMode::Byte),
            Err(ColorError::InvalidByte("25x".to_string()))
        );
        assert!(Color::parse("red", ColorMode::Byte)
            .unwrap_err()
            .to_string()
            .contains("byte color"));
        assert_eq!(Color::parse("300", ColorMode::Byte), Err(ColorError::ByteOutOfRange(300)));
        assert_eq!(Color::parse("25", ColorMode::Byte), Ok(Color::Byte(25)));
    }

    #[test]
    fn test_rgb() {
        let on = ColorPolicy::forced();
        assert_eq!(
            sgr_start(Some(&Color::Rgb(0, 0, 0)), Some(&Color::Rgb(0, 0, 0))),
            "\x1b[38;2;0;0;0;48;2;0;0;0m"
        );
        assert_eq!(
            colorize(" ", Some(Color::from_hex("0x0a0b0c").unwrap()), None, ColorMode::Rgb, &on)
                .unwrap(),
            "\x1b[38;2;10;11;12m \x1b[0m"
        );
        assert_eq!(Color::from_rgb_slice(&[1, 2]), Err(ColorError::RgbArity(2)));
        assert_eq!(
            Color::from_rgb_slice(&[-1, 1, 1]),
            Err(ColorError::RgbComponentOutOfRange(-1))
        );
        assert_eq!(Color::from_rgb_slice(&[1, 2, 3]), Ok(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn test_mode_mismatch() {
        let on = ColorPolicy::forced();
        let err = colorize("x", Some(Color::Byte(3)), None, ColorMode::Names, &on).unwrap_err();
        assert_eq!(
            err,
            ColorError::ModeMismatch {
                expected: ColorMode::Names,
                found: ColorMode::Byte
            }
        );
        assert!("NAME".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_reset_containment() {
        let on = ColorPolicy::forced();
        let out = colorize("x", Some(NamedColor::Red.into()), None, ColorMode::Names, &on).unwrap();
        assert!(out.ends_with("\x1b[0m"));
        let text_at = out.find('x').unwrap();
        assert!(!out[..text_at].contains("\x1b[0m"));

        let color_only = on.with_reset(Reset::ColorOnly);
        let red = Some(NamedColor::Red.into());
        let out = colorize("x", red, None, ColorMode::Names, &color_only).unwrap();
        assert_eq!(out, "\x1b[31mx\x1b[39;49m");
    }

    #[test]
    fn test_uncolored_passthrough() {
        let on = ColorPolicy::forced();
        assert_eq!(colorize("", None, None, ColorMode::Names, &on).unwrap(), "");
        let off = ColorPolicy::disabled();
        assert_eq!(
            colorize(
                "x",
                Some(NamedColor::Black.into()),
                Some(NamedColor::Red.into()),
                ColorMode::Names,
                &off
            )
            .unwrap(),
            "x"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Color::Named(NamedColor::BrightCyan).to_string(), "bright_cyan");
    }
}
