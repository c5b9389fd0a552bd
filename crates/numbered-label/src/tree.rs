//! The visual tree produced by [`NumberedLabel::render`](crate::NumberedLabel::render).
//!
//! A plain data description of what gets drawn. The iced adapter in
//! [`crate::view`] turns it into widgets; tests compare trees directly.

use iced::{Color, Padding};

use crate::size::FontSpec;

/// Stroke width of bordered labels.
pub const BORDER_WIDTH: f32 = 1.5;

/// How an icon glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Fill,
    Outline,
}

/// Geometric outline of the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    RoundedRect { radius: f32 },
    Capsule,
}

/// Interior paint of a filled background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Vertical gradient derived from the color.
    Gradient(Color),
    Solid(Color),
}

/// Filled region or unfilled outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Fill),
    Stroke { color: Color, width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub outline: Outline,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    pub name: String,
    pub font: FontSpec,
    pub variant: IconVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub font: FontSpec,
}

/// Title and count, side by side. At least one is present.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGroup {
    pub title: Option<TextRun>,
    pub count: Option<TextRun>,
    pub spacing: f32,
}

impl TextGroup {
    /// Text runs in display order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.title.iter().chain(self.count.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelTree {
    pub icon: Option<IconNode>,
    pub text: Option<TextGroup>,
    /// Gap between the icon and the text group.
    pub spacing: f32,
    pub padding: Padding,
    pub min_height: f32,
    pub foreground: Color,
    pub background: Decoration,
}

impl LabelTree {
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.text.is_none()
    }

    /// Rendered strings in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.text
            .iter()
            .flat_map(|group| group.runs())
            .map(|run| run.content.as_str())
            .collect()
    }
}
