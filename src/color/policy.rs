//! Color suppression policy
//!
//! Whether escape sequences are emitted is decided once, in this order:
//!
//! 1. explicit `no_color` flag
//! 2. `NO_COLOR` environment variable (any non-empty value disables color)
//! 3. `FORCE_COLOR` environment variable (`0`, `false` or `none` disables,
//!    anything else forces color even when not writing to a terminal)
//! 4. whether stdout is a terminal

use std::env;
use std::io;

use crossterm::tty::IsTty;
use serde::{Deserialize, Serialize};

/// Sequence appended after colored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reset {
    /// `ESC[0m`, resets all attributes
    #[default]
    Full,
    /// `ESC[39;49m`, resets only foreground and background
    ColorOnly,
}

impl Reset {
    pub fn sequence(self) -> &'static str {
        match self {
            Reset::Full => "\x1b[0m",
            Reset::ColorOnly => "\x1b[39;49m",
        }
    }
}

/// Resolved decision whether to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPolicy {
    enabled: bool,
    reset: Reset,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::detect(false)
    }
}

impl ColorPolicy {
    /// Always color.
    pub const fn forced() -> Self {
        Self {
            enabled: true,
            reset: Reset::Full,
        }
    }

    /// Never color.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            reset: Reset::Full,
        }
    }

    /// Read `NO_COLOR`, `FORCE_COLOR` and the TTY status of stdout.
    pub fn detect(no_color: bool) -> Self {
        let no_color_env = env::var("NO_COLOR").ok();
        let force_color_env = env::var("FORCE_COLOR").ok();
        let policy = Self::resolve(
            no_color,
            no_color_env.as_deref(),
            force_color_env.as_deref(),
            io::stdout().is_tty(),
        );
        tracing::debug!(
            enabled = policy.enabled,
            no_color,
            no_color_env = ?no_color_env,
            force_color_env = ?force_color_env,
            "Resolved color policy"
        );
        policy
    }

    /// Apply the suppression order to already gathered inputs.
    pub fn resolve(
        no_color: bool,
        no_color_env: Option<&str>,
        force_color_env: Option<&str>,
        is_tty: bool,
    ) -> Self {
        let enabled = if no_color || no_color_env.is_some_and(|v| !v.is_empty()) {
            false
        } else {
            match force_color_env.map(|v| v.trim().to_ascii_lowercase()) {
                Some(v) if !v.is_empty() => !matches!(v.as_str(), "0" | "false" | "none"),
                _ => is_tty,
            }
        };
        Self {
            enabled,
            reset: Reset::Full,
        }
    }

    #[must_use]
    pub fn with_reset(mut self, reset: Reset) -> Self {
        self.reset = reset;
        self
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn reset(&self) -> Reset {
        self.reset
    }
}
