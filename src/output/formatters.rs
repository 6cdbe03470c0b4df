//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

/// Foreground colours used by the drills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Red,
    Green,
    Yellow,
}

/// Emphasis applied on top of a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        underline: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        underline: false,
    };
    pub const UNDERLINE: Self = Self {
        bold: false,
        underline: true,
    };
    pub const BOLD_UNDERLINE: Self = Self {
        bold: true,
        underline: true,
    };
}

/// Apply a colour and style to `text`
///
/// Empty text, or text with neither colour nor style, is returned unchanged.
#[must_use]
pub fn format_text(text: &str, color: Option<TextColor>, style: TextStyle) -> String {
    if text.is_empty() || (color.is_none() && style == TextStyle::PLAIN) {
        return text.to_string();
    }

    let mut styled: ColoredString = match color {
        Some(TextColor::Red) => text.red(),
        Some(TextColor::Green) => text.green(),
        Some(TextColor::Yellow) => text.yellow(),
        None => text.normal(),
    };
    if style.bold {
        styled = styled.bold();
    }
    if style.underline {
        styled = styled.underline();
    }

    styled.to_string()
}

/// Red underlined error line
#[must_use]
pub fn error_text(text: &str) -> String {
    format_text(text, Some(TextColor::Red), TextStyle::UNDERLINE)
}

/// Join integers the way the reports print sequences
#[must_use]
pub fn join_values(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Render an optional result, showing absence as `None`
#[must_use]
pub fn optional_value(value: Option<i64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}
