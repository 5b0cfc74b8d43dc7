//! Color conversions
//!
//! 256-color palette layout:
//! - 0-15: standard and high intensity colors
//! - 16-231: 6x6x6 RGB cube
//! - 232-255: grayscale ramp in 24 steps

use super::ansi::Color;
use crate::error::ColorError;

/// Channel intensities of the 6x6x6 cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First gray of the ramp is 8, then steps of 10 up to 238.
const GRAY_START: i32 = 8;
const GRAY_STEP: i32 = 10;

/// Hex RGB (`abc`, `aabbcc`, optionally prefixed with `#` or `0x`) to channels.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix('#'))
        .unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match digits.len() {
        3 => {
            let doubled: Vec<String> = digits.chars().map(|c| format!("{c}{c}")).collect();
            Ok((channel(&doubled[0])?, channel(&doubled[1])?, channel(&doubled[2])?))
        }
        6 => Ok((channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
        _ => Err(invalid()),
    }
}

/// Nearest 256-color palette index for an RGB triple.
///
/// Both the closest cube color and the closest gray are computed; the gray wins
/// when it is strictly nearer, which is the case for (near) gray input.
pub fn rgb_to_byte(r: u8, g: u8, b: u8) -> u8 {
    let cube_index = |v: u8| {
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|&(_, &level)| (i32::from(level) - i32::from(v)).abs())
            .map_or(0, |(i, _)| i)
    };
    let (ri, gi, bi) = (cube_index(r), cube_index(g), cube_index(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);

    let average = (i32::from(r) + i32::from(g) + i32::from(b)) / 3;
    let gray_index = ((average - GRAY_START + GRAY_STEP / 2) / GRAY_STEP).clamp(0, 23);
    let gray_level = GRAY_START + GRAY_STEP * gray_index;

    let distance = |(cr, cg, cb): (i32, i32, i32)| {
        let dr = cr - i32::from(r);
        let dg = cg - i32::from(g);
        let db = cb - i32::from(b);
        dr * dr + dg * dg + db * db
    };
    let cube_distance = distance((i32::from(cube.0), i32::from(cube.1), i32::from(cube.2)));
    let gray_distance = distance((gray_level, gray_level, gray_level));

    if gray_distance < cube_distance {
        (232 + gray_index) as u8
    } else {
        (16 + 36 * ri + 6 * gi + bi) as u8
    }
}

/// HSL to a true color. `hue` in degrees, `saturation` and `lightness` in `0..=1`.
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("ff8000"), Ok((255, 128, 0)));
        assert_eq!(parse_hex("0xff8000"), Ok((255, 128, 0)));
        assert_eq!(parse_hex("#0A0b0C"), Ok((10, 11, 12)));
        for i in 0..16u8 {
            let h = format!("{i:x}");
            let v = i * 17;
            assert_eq!(parse_hex(&format!("{h}{h}{h}")), Ok((v, v, v)));
        }
        assert!(parse_hex("absd").is_err());
        assert!(parse_hex("12345").is_err());
        assert!(parse_hex("+12").is_err());
    }

    #[test]
    fn test_rgb_to_byte_cube() {
        assert_eq!(rgb_to_byte(0, 0, 0), 16);
        assert_eq!(rgb_to_byte(255, 255, 255), 231);
        assert_eq!(rgb_to_byte(255, 128, 0), 208);
        assert_eq!(rgb_to_byte(0, 128, 255), 33);
        assert_eq!(rgb_to_byte(255, 0, 0), 196);
    }

    #[test]
    fn test_rgb_to_byte_gray() {
        assert_eq!(rgb_to_byte(128, 128, 128), 244);
        assert_eq!(rgb_to_byte(8, 8, 8), 232);
        assert_eq!(rgb_to_byte(238, 238, 238), 255);
        assert_eq!(rgb_to_byte(130, 128, 126), 244);
    }

    #[test]
    fn test_hsl() {
        assert_eq!(hsl(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
        assert_eq!(hsl(360.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl(0.0, 0.0, 0.8), Color::Rgb(204, 204, 204));
        assert_eq!(hsl(42.0, 0.3, 0.0), Color::Rgb(0, 0, 0));
    }
}
