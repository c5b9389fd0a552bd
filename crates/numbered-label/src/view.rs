//! iced rendering of a [`LabelTree`].

use iced::widget::{container, row, text, Space};
use iced::{gradient, Alignment, Background, Border, Color, Element, Gradient, Radians, Theme};

use crate::color;
use crate::icons::IconSet;
use crate::tree::{Decoration, Fill, LabelTree, Paint};

/// How far the top of a gradient fill is lifted toward white.
pub const GRADIENT_LIGHTEN: f32 = 0.2;

/// Build the widget for a rendered label.
///
/// Layout: `[ strut | icon  title count ]` inside a padded, decorated
/// container. The zero-width strut holds the content at least
/// `min_height` tall once padding is added, empty labels included.
pub fn label_tree<'a, Message: 'a>(
    tree: &LabelTree,
    icons: &impl IconSet,
    rounded_font: Option<&'static str>,
) -> Element<'a, Message> {
    let fg = tree.foreground;

    let mut content = row![]
        .spacing(tree.spacing)
        .align_y(Alignment::Center);

    if let Some(icon) = &tree.icon {
        if let Some(glyph) = icons.glyph(&icon.name, icon.variant) {
            content = content.push(glyph.size(icon.font.point_size()).color(fg));
        }
    }

    if let Some(group) = &tree.text {
        let mut runs = row![].spacing(group.spacing).align_y(Alignment::Center);
        for run in group.runs() {
            runs = runs.push(
                text(run.content.clone())
                    .size(run.font.point_size())
                    .font(run.font.font(rounded_font))
                    .color(fg),
            );
        }
        content = content.push(runs);
    }

    let body = row![Space::new().width(0).height(strut_height(tree)), content]
        .align_y(Alignment::Center);

    let decoration = tree.background;
    container(body)
        .padding(tree.padding)
        .style(move |_theme: &Theme| decoration_style(&decoration, fg))
        .into()
}

/// Height of the strut that, with vertical padding added, reaches
/// `min_height`. Zero when the padding alone is already taller.
pub fn strut_height(tree: &LabelTree) -> f32 {
    (tree.min_height - tree.padding.top - tree.padding.bottom).max(0.0)
}

/// Container style for a label background.
pub fn decoration_style(decoration: &Decoration, foreground: Color) -> container::Style {
    let radius = decoration.outline.border_radius();
    match decoration.paint {
        Paint::Fill(fill) => container::Style {
            text_color: Some(foreground),
            background: Some(fill_background(fill)),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..Default::default()
        },
        Paint::Stroke { color, width } => container::Style {
            text_color: Some(foreground),
            background: None,
            border: Border {
                color,
                width,
                radius: radius.into(),
            },
            ..Default::default()
        },
    }
}

fn fill_background(fill: Fill) -> Background {
    match fill {
        Fill::Solid(c) => Background::Color(c),
        Fill::Gradient(c) => {
            let linear = gradient::Linear::new(Radians(std::f32::consts::PI))
                .add_stop(0.0, color::lighten(c, GRADIENT_LIGHTEN))
                .add_stop(1.0, c);
            Background::Gradient(Gradient::Linear(linear))
        }
    }
}
