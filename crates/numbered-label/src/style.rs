//! Style axis: foreground, stroke, icon rendering, and background fill.

use iced::Color;

use crate::color;
use crate::tree::{Fill, IconVariant};

/// White level of the disabled foreground.
pub const DISABLED_WHITE: f32 = 0.6;

/// Visual style of a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    /// Gradient fill in the color with white content.
    Filled(Color),
    /// Faint wash of the color with colored content.
    Tinted(Color),
    /// Outline in the color, no fill.
    Bordered(Color),
    /// Neutral gray, ignores any tint.
    Disabled,
}

impl Default for Style {
    fn default() -> Self {
        Style::Tinted(color::ACCENT)
    }
}

impl Style {
    pub fn foreground_color(&self) -> Color {
        match *self {
            Style::Filled(_) => Color::WHITE,
            Style::Tinted(color) => color,
            Style::Bordered(color) => color,
            Style::Disabled => color::gray(DISABLED_WHITE),
        }
    }

    pub fn stroke_color(&self) -> Color {
        match *self {
            Style::Filled(_) => Color::TRANSPARENT,
            Style::Tinted(_) => Color::TRANSPARENT,
            Style::Bordered(color) => color,
            Style::Disabled => Color::TRANSPARENT,
        }
    }

    pub fn icon_variant(&self) -> IconVariant {
        match self {
            Style::Bordered(_) => IconVariant::Outline,
            Style::Filled(_) | Style::Tinted(_) | Style::Disabled => IconVariant::Fill,
        }
    }

    /// Background fill, or `None` for outline-only styles.
    pub fn fill(&self) -> Option<Fill> {
        match *self {
            Style::Filled(color) => Some(Fill::Gradient(color)),
            Style::Tinted(color) => Some(Fill::Solid(color::quinary(color))),
            Style::Disabled => Some(Fill::Solid(color::quinary(color::SECONDARY))),
            Style::Bordered(_) => None,
        }
    }

    /// The caller-supplied color, if the style carries one.
    pub fn tint(&self) -> Option<Color> {
        match *self {
            Style::Filled(color) | Style::Tinted(color) | Style::Bordered(color) => Some(color),
            Style::Disabled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(color: Color) -> [Style; 4] {
        [
            Style::Filled(color),
            Style::Tinted(color),
            Style::Bordered(color),
            Style::Disabled,
        ]
    }

    #[test]
    fn test_foreground() {
        assert_eq!(Style::Filled(color::INDIGO).foreground_color(), Color::WHITE);
        assert_eq!(Style::Tinted(color::MINT).foreground_color(), color::MINT);
        assert_eq!(Style::Bordered(color::CYAN).foreground_color(), color::CYAN);
        assert_eq!(Style::Disabled.foreground_color(), color::gray(0.6));
    }

    #[test]
    fn test_stroke_only_when_bordered() {
        for style in all(color::ORANGE) {
            let stroke = style.stroke_color();
            match style {
                Style::Bordered(c) => assert_eq!(stroke, c),
                _ => assert_eq!(stroke, Color::TRANSPARENT),
            }
        }
    }

    #[test]
    fn test_icon_variant() {
        assert_eq!(Style::Bordered(color::RED).icon_variant(), IconVariant::Outline);
        assert_eq!(Style::Filled(color::RED).icon_variant(), IconVariant::Fill);
        assert_eq!(Style::Tinted(color::RED).icon_variant(), IconVariant::Fill);
        assert_eq!(Style::Disabled.icon_variant(), IconVariant::Fill);
    }

    #[test]
    fn test_fill() {
        assert_eq!(
            Style::Filled(color::INDIGO).fill(),
            Some(Fill::Gradient(color::INDIGO))
        );
        assert_eq!(
            Style::Tinted(color::MINT).fill(),
            Some(Fill::Solid(color::quinary(color::MINT)))
        );
        assert_eq!(
            Style::Disabled.fill(),
            Some(Fill::Solid(color::quinary(color::SECONDARY)))
        );
        assert_eq!(Style::Bordered(color::CYAN).fill(), None);
    }

    #[test]
    fn test_disabled_never_exposes_caller_color() {
        let caller = Color::from_rgb8(0x12, 0x34, 0x56);
        let disabled = Style::Disabled;
        assert_eq!(disabled.tint(), None);
        assert_ne!(disabled.foreground_color(), caller);
        assert_ne!(disabled.stroke_color(), caller);
        for style in all(caller) {
            if style != Style::Disabled {
                assert_eq!(style.tint(), Some(caller));
            }
        }
    }

    #[test]
    fn test_default_is_tinted_accent() {
        assert_eq!(Style::default(), Style::Tinted(color::ACCENT));
    }
}
