//! Color helpers: hex parsing, the named palette, and hierarchical tints.
//!
//! Palette values follow the platform system colors so labels look the same
//! whether the color came from code or from a TOML config file.

use iced::Color;

use crate::error::LabelError;

// ── Named palette ────────────────────────────────────────────────

pub const ACCENT: Color = Color::from_rgb(0.0, 0.478, 1.0);
pub const INDIGO: Color = Color::from_rgb(0.345, 0.337, 0.839);
pub const MINT: Color = Color::from_rgb(0.0, 0.780, 0.745);
pub const ORANGE: Color = Color::from_rgb(1.0, 0.584, 0.0);
pub const CYAN: Color = Color::from_rgb(0.196, 0.678, 0.902);
pub const PURPLE: Color = Color::from_rgb(0.686, 0.322, 0.871);
pub const RED: Color = Color::from_rgb(1.0, 0.231, 0.188);
pub const GREEN: Color = Color::from_rgb(0.204, 0.780, 0.349);
pub const PINK: Color = Color::from_rgb(1.0, 0.176, 0.333);
pub const TEAL: Color = Color::from_rgb(0.188, 0.690, 0.780);
pub const YELLOW: Color = Color::from_rgb(1.0, 0.800, 0.0);

/// Base of the secondary (label) hierarchy.
pub const SECONDARY: Color = Color::from_rgb(0.557, 0.557, 0.576);

/// Opacity of the fifth hierarchical level.
pub const QUINARY_ALPHA: f32 = 0.1;

/// Look up a palette color by name (case-insensitive).
pub fn named(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "accent" | "blue" => ACCENT,
        "indigo" => INDIGO,
        "mint" => MINT,
        "orange" => ORANGE,
        "cyan" => CYAN,
        "purple" => PURPLE,
        "red" => RED,
        "green" => GREEN,
        "pink" => PINK,
        "teal" => TEAL,
        "yellow" => YELLOW,
        "gray" | "grey" | "secondary" => SECONDARY,
        "white" => Color::WHITE,
        "black" => Color::BLACK,
        _ => return None,
    };
    Some(color)
}

/// A neutral gray at the given white level.
pub fn gray(white: f32) -> Color {
    Color::from_rgb(white, white, white)
}

/// The color at the quinary hierarchical level (faint wash).
pub fn quinary(color: Color) -> Color {
    Color {
        a: color.a * QUINARY_ALPHA,
        ..color
    }
}

/// Mix `color` toward white by `amount` (0.0 = unchanged, 1.0 = white).
pub fn lighten(color: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color {
        r: color.r + (1.0 - color.r) * t,
        g: color.g + (1.0 - color.g) * t,
        b: color.b + (1.0 - color.b) * t,
        a: color.a,
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional) or a palette name.
pub fn parse(s: &str) -> Result<Color, LabelError> {
    let s = s.trim();
    if let Some(color) = named(s) {
        return Ok(color);
    }
    parse_hex(s)
}

fn parse_hex(s: &str) -> Result<Color, LabelError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .ok_or_else(|| LabelError::Color(s.to_string()))
    };
    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => {
            let a = channel(6..8)?;
            Ok(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                a as f32 / 255.0,
            ))
        }
        _ => Err(LabelError::Color(s.to_string())),
    }
}

/// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let r = (color.r * 255.0).round() as u8;
    let g = (color.g * 255.0).round() as u8;
    let b = (color.b * 255.0).round() as u8;
    if (color.a - 1.0).abs() < f32::EPSILON {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        let a = (color.a * 255.0).round() as u8;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

/// Serde adapter for colors written as hex strings or palette names.
pub mod hex {
    use iced::Color;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse(&s).map_err(serde::de::Error::custom)
    }
}
