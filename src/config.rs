//! Configuration for the termdots binary.
//!
//! The configuration file is located at `~/.termdots/config.toml`:
//!
//! ```toml
//! # Color mode: names, byte, rgb
//! color_mode = "rgb"
//!
//! # Never emit escape sequences
//! no_color = false
//!
//! # Reset after colored text: full, color-only
//! reset = "full"
//!
//! # Plot size in characters (defaults to the terminal size)
//! width = 80
//! height = 24
//!
//! # Line separator (defaults to the platform separator)
//! line_separator = "\n"
//!
//! # Log level when RUST_LOG is not set
//! log_level = "warn"
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::{ColorMode, ColorPolicy, Reset};
use crate::core::LINE_SEPARATOR;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_mode: ColorMode,
    pub no_color: bool,
    pub reset: Reset,
    /// Plot width in characters
    pub width: Option<usize>,
    /// Plot height in characters
    pub height: Option<usize>,
    pub line_separator: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Names,
            no_color: false,
            reset: Reset::Full,
            width: None,
            height: None,
            line_separator: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termdots").join("config.toml"))
    }

    pub fn line_separator(&self) -> &str {
        self.line_separator.as_deref().unwrap_or(LINE_SEPARATOR)
    }

    /// Resolve the color policy from `no_color`, the environment and the TTY.
    pub fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::detect(self.no_color).with_reset(self.reset)
    }

    /// Plot size: configured values, else the terminal size minus one line for
    /// the prompt, else 60x20.
    pub fn plot_size(&self) -> (usize, usize) {
        let (cols, rows) = crossterm::terminal::size()
            .map(|(c, r)| (usize::from(c), usize::from(r).saturating_sub(1)))
            .unwrap_or((60, 20));
        (
            self.width.unwrap_or(cols).max(1),
            self.height.unwrap_or(rows).max(1),
        )
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.line_separator(), LINE_SEPARATOR);
    }

    #[test]
    fn test_parse() {
        let config = Config::parse(
            r#"
            color_mode = "byte"
            no_color = true
            reset = "color-only"
            width = 30
            line_separator = "|"
            "#,
        )
        .unwrap();
        assert_eq!(config.color_mode, ColorMode::Byte);
        assert!(config.no_color);
        assert_eq!(config.reset, Reset::ColorOnly);
        assert_eq!(config.width, Some(30));
        assert_eq!(config.height, None);
        assert_eq!(config.line_separator(), "|");
        assert!(!config.color_policy().enabled());
        assert_eq!(config.plot_size().0, 30);
    }

    #[test]
    fn test_invalid_mode() {
        assert!(Config::parse(r#"color_mode = "hsv""#).is_err());
    }
}
