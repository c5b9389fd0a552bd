use iced::{Element, Padding};

use crate::environment::{Environment, Overrides, Resolved};
use crate::icons::{IconSet, LucideIcons};
use crate::shape::Shape;
use crate::size::Size;
use crate::style::Style;
use crate::tree::{Decoration, IconNode, LabelTree, Paint, TextGroup, TextRun, BORDER_WIDTH};
use crate::view;

/// An icon, a title, and a count on a decorated background.
///
/// Every part is optional. Size, style, and shape come from the
/// [`Environment`] unless set on the label itself:
///
/// ```ignore
/// let env = Environment::default().with_style(Style::Filled(color::INDIGO));
/// NumberedLabel::titled("Work")
///     .icon("desktopcomputer")
///     .count(23)
///     .view(&env)
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberedLabel {
    title: Option<String>,
    icon: Option<String>,
    count: Option<i64>,
    overrides: Overrides,
}

impl NumberedLabel {
    pub fn new(title: Option<&str>, icon: Option<&str>, count: Option<i64>) -> Self {
        Self {
            title: title.map(str::to_owned),
            icon: icon.map(str::to_owned),
            count,
            overrides: Overrides::default(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn icon(self, name: impl Into<String>) -> Self {
        Self {
            icon: Some(name.into()),
            ..self
        }
    }

    pub fn count(self, count: i64) -> Self {
        Self {
            count: Some(count),
            ..self
        }
    }

    /// Set the size on this label only.
    pub fn size(self, size: Size) -> Self {
        Self {
            overrides: Overrides {
                size: Some(size),
                ..self.overrides
            },
            ..self
        }
    }

    /// Set the style on this label only.
    pub fn style(self, style: Style) -> Self {
        Self {
            overrides: Overrides {
                style: Some(style),
                ..self.overrides
            },
            ..self
        }
    }

    /// Set the shape on this label only.
    pub fn shape(self, shape: Shape) -> Self {
        Self {
            overrides: Overrides {
                shape: Some(shape),
                ..self.overrides
            },
            ..self
        }
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Build the visual tree for this label under `env`.
    pub fn render(&self, env: &Environment) -> LabelTree {
        let Resolved { size, style, shape } = self.overrides.resolve(env);
        let metrics = size.metrics();

        let icon = self.icon.as_ref().map(|name| IconNode {
            name: name.clone(),
            font: metrics.icon_font,
            variant: style.icon_variant(),
        });

        let title = self.title.as_ref().map(|title| TextRun {
            content: title.clone(),
            font: metrics.title_font,
        });
        let count = self.count.map(|count| TextRun {
            content: count.to_string(),
            font: metrics.count_font,
        });
        let text = if title.is_some() || count.is_some() {
            Some(TextGroup {
                title,
                count,
                spacing: metrics.spacing,
            })
        } else {
            None
        };

        let paint = match style.fill() {
            Some(fill) => Paint::Fill(fill),
            None => Paint::Stroke {
                color: style.stroke_color(),
                width: BORDER_WIDTH,
            },
        };

        LabelTree {
            icon,
            text,
            spacing: metrics.spacing,
            padding: Padding::from([metrics.vertical_padding, metrics.horizontal_padding]),
            min_height: metrics.min_height,
            foreground: style.foreground_color(),
            background: Decoration {
                outline: shape.outline(size),
                paint,
            },
        }
    }

    /// Render with the bundled Lucide icons.
    pub fn view<'a, Message: 'a>(&self, env: &Environment) -> Element<'a, Message> {
        self.view_with(env, &LucideIcons)
    }

    pub fn view_with<'a, Message: 'a>(
        &self,
        env: &Environment,
        icons: &impl IconSet,
    ) -> Element<'a, Message> {
        view::label_tree(&self.render(env), icons, env.rounded_font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::size::FontSpec;
    use crate::tree::{Fill, IconVariant, Outline};

    #[test]
    fn test_work_label_filled_indigo() {
        let env = Environment::default()
            .with_style(Style::Filled(color::INDIGO))
            .with_size(Size::Medium)
            .with_shape(Shape::RoundedRect);
        let tree = NumberedLabel::new(Some("Work"), Some("desktopcomputer"), Some(23)).render(&env);

        assert_eq!(tree.foreground, iced::Color::WHITE);
        assert_eq!(
            tree.background,
            Decoration {
                outline: Outline::RoundedRect { radius: 8.0 },
                paint: Paint::Fill(Fill::Gradient(color::INDIGO)),
            }
        );
        assert_eq!(tree.min_height, 32.0);
        assert_eq!(tree.texts(), vec!["Work", "23"]);

        let icon = tree.icon.expect("icon present");
        assert_eq!(icon.name, "desktopcomputer");
        assert_eq!(icon.variant, IconVariant::Fill);
        assert_eq!(icon.font, Size::Medium.icon_font());
    }

    #[test]
    fn test_empty_disabled_label() {
        let env = Environment::default().with_style(Style::Disabled);
        let tree = NumberedLabel::new(None, None, None).render(&env);

        assert!(tree.is_empty());
        assert!(tree.icon.is_none());
        assert!(tree.text.is_none());
        assert_eq!(tree.foreground, color::gray(0.6));
        assert_eq!(
            tree.background.paint,
            Paint::Fill(Fill::Solid(color::quinary(color::SECONDARY)))
        );
        assert_eq!(tree.min_height, Size::Medium.min_height());
        assert_eq!(tree.padding, Padding::from([6.0_f32, 12.0]));
    }

    #[test]
    fn test_bordered_capsule_is_stroked() {
        let env = Environment::default()
            .with_style(Style::Bordered(color::CYAN))
            .with_shape(Shape::Capsule);
        let tree = NumberedLabel::titled("Sport").icon("sportscourt").render(&env);

        assert_eq!(tree.background.outline, Outline::Capsule);
        assert_eq!(
            tree.background.paint,
            Paint::Stroke {
                color: color::CYAN,
                width: 1.5
            }
        );
        assert_eq!(tree.foreground, color::CYAN);
        assert_eq!(tree.icon.unwrap().variant, IconVariant::Outline);
    }

    #[test]
    fn test_omits_text_group_without_title_and_count() {
        let tree = NumberedLabel::default()
            .icon("house")
            .render(&Environment::default());
        assert!(tree.text.is_none());
        assert!(tree.icon.is_some());
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_omits_icon_without_name() {
        let tree = NumberedLabel::titled("Study")
            .count(24)
            .render(&Environment::default());
        assert!(tree.icon.is_none());
        assert_eq!(tree.texts(), vec!["Study", "24"]);
    }

    #[test]
    fn test_count_only() {
        let tree = NumberedLabel::new(None, None, Some(126)).render(&Environment::default());
        let group = tree.text.expect("text group present");
        assert!(group.title.is_none());
        assert_eq!(group.count.unwrap().content, "126");
    }

    #[test]
    fn test_count_has_no_grouping() {
        let env = Environment::default();
        let tree = NumberedLabel::default().count(1_234_567).render(&env);
        assert_eq!(tree.texts(), vec!["1234567"]);
        let tree = NumberedLabel::default().count(-5).render(&env);
        assert_eq!(tree.texts(), vec!["-5"]);
    }

    #[test]
    fn test_fonts_follow_size() {
        let env = Environment::default().with_size(Size::Small);
        let tree = NumberedLabel::new(Some("Chores"), Some("house"), Some(8)).render(&env);
        let small: FontSpec = Size::Small.title_font();
        let group = tree.text.unwrap();
        assert_eq!(group.title.unwrap().font, small);
        assert_eq!(group.count.unwrap().font, Size::Small.count_font());
        assert_eq!(group.spacing, 4.0);
        assert_eq!(tree.spacing, 4.0);
        assert_eq!(tree.padding, Padding::from([5.0_f32, 10.0]));
    }

    #[test]
    fn test_local_override_beats_ambient() {
        let env = Environment::default()
            .with_size(Size::Small)
            .with_style(Style::Tinted(color::MINT))
            .with_shape(Shape::Capsule);
        let label = NumberedLabel::titled("Swift")
            .size(Size::Medium)
            .style(Style::Filled(color::PURPLE));
        let tree = label.render(&env);

        assert_eq!(tree.min_height, 32.0);
        assert_eq!(tree.foreground, iced::Color::WHITE);
        // Shape was not set locally, so the ambient capsule applies.
        assert_eq!(tree.background.outline, Outline::Capsule);
    }

    #[test]
    fn test_local_setters_return_copies() {
        let base = NumberedLabel::titled("Work");
        let small = base.clone().size(Size::Small);
        assert_eq!(base.overrides().size, None);
        assert_eq!(small.overrides().size, Some(Size::Small));
        assert_ne!(base, small);
    }

    #[test]
    fn test_render_is_idempotent() {
        let env = Environment::default().with_style(Style::Bordered(color::ORANGE));
        let label = NumberedLabel::new(Some("Chores"), Some("house"), Some(8));
        assert_eq!(label.render(&env), label.render(&env));
    }

    #[test]
    fn test_view_builds_for_every_combination() {
        let styles = [
            Style::Filled(color::INDIGO),
            Style::Tinted(color::MINT),
            Style::Bordered(color::CYAN),
            Style::Disabled,
        ];
        for size in Size::ALL {
            for shape in Shape::ALL {
                for style in styles {
                    let env = Environment::default()
                        .with_size(size)
                        .with_shape(shape)
                        .with_style(style);
                    let _: Element<'_, ()> = NumberedLabel::titled("Work")
                        .icon("desktopcomputer")
                        .count(23)
                        .view(&env);
                    let _: Element<'_, ()> = NumberedLabel::default().view(&env);
                }
            }
        }
    }
}
