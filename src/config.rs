//! Runtime configuration
//!
//! Environment lookups and the display theme.

use std::time::Duration;

use crate::types::StrengthCategory;

/// Environment variable overriding the evaluation debounce delay (milliseconds).
pub const DEBOUNCE_ENV: &str = "PASS_CHECKER_DEBOUNCE_MS";

const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Returns the delay to wait before a keystroke-driven evaluation.
///
/// Priority:
/// 1. Environment variable `PASS_CHECKER_DEBOUNCE_MS`
/// 2. Default of 300 ms
///
/// Values that do not parse as an integer fall back to the default.
pub fn get_debounce_delay() -> Duration {
    let millis = std::env::var(DEBOUNCE_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_DEBOUNCE_MS);
    Duration::from_millis(millis)
}

/// Environment variable overriding how long a one-shot copy serves the
/// clipboard (seconds).
pub const CLIPBOARD_HOLD_ENV: &str = "PASS_CHECKER_CLIPBOARD_SECS";

const DEFAULT_CLIPBOARD_HOLD_SECS: u64 = 30;

/// Returns how long a one-shot copy keeps the clipboard content available.
///
/// Priority:
/// 1. Environment variable `PASS_CHECKER_CLIPBOARD_SECS`
/// 2. Default of 30 s
pub fn get_clipboard_hold() -> Duration {
    let secs = std::env::var(CLIPBOARD_HOLD_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CLIPBOARD_HOLD_SECS);
    Duration::from_secs(secs)
}

/// Colour palette, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub panel: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub entry_background: &'static str,
    pub entry_foreground: &'static str,
    pub trough: &'static str,
    pub weak: &'static str,
    pub medium: &'static str,
    pub strong: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#0b0f0b",
            panel: "#101c10",
            accent: "#00ff88",
            text: "#7CFC00",
            entry_background: "#0f2410",
            entry_foreground: "#00ff88",
            trough: "#1a2a1a",
            weak: "#ff4d4d",
            medium: "#ffc107",
            strong: "#00ff88",
        }
    }
}

impl Theme {
    /// Colour of the strength label for `category`.
    pub fn color_for(&self, category: StrengthCategory) -> &'static str {
        match category {
            StrengthCategory::Weak => self.weak,
            StrengthCategory::Medium => self.medium,
            StrengthCategory::Strong => self.strong,
        }
    }
}

/// Maps a `#rrggbb` colour onto the 6x6x6 cube of the 256-colour terminal
/// palette. Returns `None` for malformed input.
pub fn ansi256(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|c| (u16::from(c) * 5 + 127) / 255)
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some((16 + 36 * r + 6 * g + b) as u8)
}
