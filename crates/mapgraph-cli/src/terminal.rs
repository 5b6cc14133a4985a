//! Terminal styling for replay output.
//!
//! Colors are only emitted when stdout is a terminal and neither `NO_COLOR`
//! nor `TERM=dumb` is set.

use std::io::IsTerminal;

/// ANSI escape codes.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for START tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for VISIT tags.
    pub const TAG_VISIT: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Resolved color codes, or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_visit: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_visit: colors::TAG_VISIT,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_visit: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
        }
    }

    /// `colored()` when [`supports_color`] holds, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check whether ANSI color codes should be written to stdout.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

/// Format an integer with thousands separators, e.g. `12345` as `12,345`.
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a meter distance, rounding to whole meters.
#[must_use]
pub fn format_meters(meters: f64) -> String {
    if !meters.is_finite() {
        return "unreachable".to_string();
    }
    format!("{} m", format_with_separators(meters.max(0.0).round() as u64))
}
