//! Size axis: layout constants and typography per label size.

use iced::font::{Family, Weight};
use iced::Font;
use serde::Deserialize;

/// Label size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
}

/// Named text style on the platform type ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Subheadline,
    Footnote,
    Caption2,
}

impl TextStyle {
    /// Point size at the default content size category.
    pub fn point_size(self) -> f32 {
        match self {
            TextStyle::Subheadline => 15.0,
            TextStyle::Footnote => 13.0,
            TextStyle::Caption2 => 11.0,
        }
    }
}

/// Font design (face family class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontDesign {
    Default,
    Rounded,
}

/// A font descriptor, resolved to an `iced::Font` only at view time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub text_style: TextStyle,
    pub design: FontDesign,
    pub weight: Weight,
}

impl FontSpec {
    pub const fn new(text_style: TextStyle, design: FontDesign, weight: Weight) -> Self {
        Self {
            text_style,
            design,
            weight,
        }
    }

    pub fn point_size(&self) -> f32 {
        self.text_style.point_size()
    }

    /// Build the iced font. Rounded descriptors use `rounded_family` when one
    /// is configured, otherwise the default sans-serif face.
    pub fn font(&self, rounded_family: Option<&'static str>) -> Font {
        let family = match (self.design, rounded_family) {
            (FontDesign::Rounded, Some(name)) => Family::Name(name),
            (FontDesign::Rounded, None) | (FontDesign::Default, _) => Family::SansSerif,
        };
        Font {
            family,
            weight: self.weight,
            ..Font::DEFAULT
        }
    }
}

/// All presentational constants derived from a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub min_height: f32,
    pub title_font: FontSpec,
    pub icon_font: FontSpec,
    pub count_font: FontSpec,
    pub corner_radius: f32,
    pub spacing: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
}

const SMALL_FONT: FontSpec =
    FontSpec::new(TextStyle::Caption2, FontDesign::Rounded, Weight::Semibold);

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Medium];

    pub fn metrics(self) -> SizeMetrics {
        match self {
            Size::Medium => SizeMetrics {
                min_height: 32.0,
                title_font: FontSpec::new(
                    TextStyle::Subheadline,
                    FontDesign::Rounded,
                    Weight::Semibold,
                ),
                icon_font: FontSpec::new(
                    TextStyle::Footnote,
                    FontDesign::Rounded,
                    Weight::Semibold,
                ),
                count_font: FontSpec::new(TextStyle::Footnote, FontDesign::Default, Weight::Black),
                corner_radius: 8.0,
                spacing: 6.0,
                horizontal_padding: 12.0,
                vertical_padding: 6.0,
            },
            Size::Small => SizeMetrics {
                min_height: 20.0,
                title_font: SMALL_FONT,
                icon_font: SMALL_FONT,
                count_font: SMALL_FONT,
                corner_radius: 6.0,
                spacing: 4.0,
                horizontal_padding: 10.0,
                vertical_padding: 5.0,
            },
        }
    }

    pub fn min_height(self) -> f32 {
        self.metrics().min_height
    }

    pub fn title_font(self) -> FontSpec {
        self.metrics().title_font
    }

    pub fn icon_font(self) -> FontSpec {
        self.metrics().icon_font
    }

    pub fn count_font(self) -> FontSpec {
        self.metrics().count_font
    }

    pub fn corner_radius(self) -> f32 {
        self.metrics().corner_radius
    }

    pub fn spacing(self) -> f32 {
        self.metrics().spacing
    }

    pub fn horizontal_padding(self) -> f32 {
        self.metrics().horizontal_padding
    }

    pub fn vertical_padding(self) -> f32 {
        self.metrics().vertical_padding
    }
}
