//! Ambient label configuration.
//!
//! An [`Environment`] is passed by value down the view call chain. A parent
//! derives a child context with `with_size` / `with_style` / `with_shape`
//! before handing it to its children, so an override only reaches the
//! subtree it was applied to. Labels may carry their own [`Overrides`],
//! which win over whatever the environment holds.

use iced::{Color, Theme};

use crate::shape::Shape;
use crate::size::Size;
use crate::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Environment {
    pub size: Size,
    pub style: Style,
    pub shape: Shape,
    /// Family used for rounded font descriptors, if one is loaded.
    pub rounded_font: Option<&'static str>,
}

impl Environment {
    /// Root environment whose default style is tinted in the theme's
    /// primary color.
    pub fn from_theme(theme: &Theme) -> Self {
        Self::default().with_accent(theme.palette().primary)
    }

    /// Replace the accent used by the default tinted style.
    pub fn with_accent(self, accent: Color) -> Self {
        self.with_style(Style::Tinted(accent))
    }

    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    pub fn with_rounded_font(self, family: &'static str) -> Self {
        Self {
            rounded_font: Some(family),
            ..self
        }
    }
}

/// Values set directly on a label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overrides {
    pub size: Option<Size>,
    pub style: Option<Style>,
    pub shape: Option<Shape>,
}

/// The three axes after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub size: Size,
    pub style: Style,
    pub shape: Shape,
}

impl Overrides {
    /// Local value if set, otherwise the ambient one.
    pub fn resolve(&self, env: &Environment) -> Resolved {
        Resolved {
            size: self.size.unwrap_or(env.size),
            style: self.style.unwrap_or(env.style),
            shape: self.shape.unwrap_or(env.shape),
        }
    }
}
