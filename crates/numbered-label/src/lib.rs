//! A compact label widget for iced: optional icon, optional title, optional
//! count, on a filled, tinted, bordered, or disabled background.
//!
//! Size, style, and shape are read from an [`Environment`] that callers pass
//! down their view functions, and can be overridden per label.

pub mod color;
pub mod config;
pub mod environment;
pub mod error;
pub mod icons;
pub mod label;
pub mod shape;
pub mod size;
pub mod style;
pub mod tree;
pub mod view;

pub use config::LabelDefaults;
pub use environment::{Environment, Overrides, Resolved};
pub use error::LabelError;
pub use icons::{IconSet, LucideIcons};
pub use label::NumberedLabel;
pub use shape::Shape;
pub use size::{FontDesign, FontSpec, Size, SizeMetrics, TextStyle};
pub use style::Style;
pub use tree::LabelTree;
