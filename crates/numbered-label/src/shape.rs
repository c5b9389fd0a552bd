//! Shape axis: which outline the background uses.

use serde::Deserialize;

use crate::size::Size;
use crate::tree::Outline;

/// Radius large enough that any label renders as a pill.
pub const RADIUS_FULL: f32 = 9999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    RoundedRect,
    Capsule,
}

impl Shape {
    pub const ALL: [Shape; 2] = [Shape::RoundedRect, Shape::Capsule];

    /// Resolve the outline. Only rounded rectangles take the size's radius.
    pub fn outline(self, size: Size) -> Outline {
        match self {
            Shape::RoundedRect => Outline::RoundedRect {
                radius: size.corner_radius(),
            },
            Shape::Capsule => Outline::Capsule,
        }
    }
}

impl Outline {
    /// Corner radius to hand to the renderer.
    pub fn border_radius(&self) -> f32 {
        match *self {
            Outline::RoundedRect { radius } => radius,
            Outline::Capsule => RADIUS_FULL,
        }
    }
}
