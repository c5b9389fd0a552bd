//! Icon lookup by identifier.
//!
//! Identifiers are resolved through an [`IconSet`]. The bundled
//! [`LucideIcons`] set understands kebab-case Lucide names plus a handful of
//! platform symbol names. Unknown identifiers draw nothing.

use iced::widget::Text;
use lucide_icons::iced as lucide;

use crate::tree::IconVariant;

/// A source of icon glyphs.
pub trait IconSet {
    /// Look up a glyph. `None` leaves the icon slot blank.
    fn glyph<'a>(&self, name: &str, variant: IconVariant) -> Option<Text<'a>>;
}

/// Lucide glyphs. Lucide ships outline glyphs only, so the variant does not
/// change the lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct LucideIcons;

impl LucideIcons {
    /// Whether `name` resolves to a glyph.
    pub fn contains(name: &str) -> bool {
        lucide_glyph(name).is_some()
    }
}

impl IconSet for LucideIcons {
    fn glyph<'a>(&self, name: &str, _variant: IconVariant) -> Option<Text<'a>> {
        let glyph = lucide_glyph(name);
        if glyph.is_none() {
            tracing::debug!("No lucide glyph for icon {name:?}");
        }
        glyph
    }
}

fn lucide_glyph<'a>(name: &str) -> Option<Text<'a>> {
    let glyph = match name {
        "monitor" | "desktopcomputer" => lucide::icon_monitor(),
        "house" | "home" => lucide::icon_house(),
        "trophy" | "sportscourt" => lucide::icon_trophy(),
        "code" | "swift" => lucide::icon_code(),
        "book-open" | "book" => lucide::icon_book_open(),
        "tag" => lucide::icon_tag(),
        "folder" => lucide::icon_folder(),
        "star" => lucide::icon_star(),
        "heart" => lucide::icon_heart(),
        "bell" => lucide::icon_bell(),
        "calendar" => lucide::icon_calendar(),
        "check" | "checkmark" => lucide::icon_check(),
        "circle-check" | "checkmark.circle" => lucide::icon_circle_check(),
        "circle-x" | "xmark.circle" => lucide::icon_circle_x(),
        "x" | "xmark" => lucide::icon_x(),
        "info" | "info.circle" => lucide::icon_info(),
        "film" => lucide::icon_film(),
        "globe" => lucide::icon_globe(),
        "play" => lucide::icon_play(),
        "circle-play" | "play.circle" => lucide::icon_circle_play(),
        "list" | "list.bullet" => lucide::icon_list(),
        "search" | "magnifyingglass" => lucide::icon_search(),
        "plus" => lucide::icon_plus(),
        "minus" => lucide::icon_minus(),
        _ => return None,
    };
    Some(glyph)
}
