use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use directories::ProjectDirs;
use iced::Color;
use serde::Deserialize;

use crate::color;
use crate::environment::Environment;
use crate::error::LabelError;
use crate::shape::Shape;
use crate::size::Size;
use crate::style::Style;

const FILE_NAME: &str = "label.toml";

/// Root label configuration, as written in `label.toml`.
///
/// ```toml
/// size = "small"
/// shape = "capsule"
/// rounded_font = "Nunito"
///
/// [style]
/// kind = "filled"
/// color = "indigo"   # or "#5856D6"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LabelDefaults {
    pub size: Size,
    pub shape: Shape,
    pub style: StyleConfig,
    pub rounded_font: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Filled,
    Tinted,
    Bordered,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub kind: StyleKind,
    /// Ignored for `disabled`.
    #[serde(deserialize_with = "color::hex::deserialize")]
    pub color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            kind: StyleKind::Tinted,
            color: color::ACCENT,
        }
    }
}

impl StyleConfig {
    pub fn style(&self) -> Style {
        match self.kind {
            StyleKind::Filled => Style::Filled(self.color),
            StyleKind::Tinted => Style::Tinted(self.color),
            StyleKind::Bordered => Style::Bordered(self.color),
            StyleKind::Disabled => Style::Disabled,
        }
    }
}

impl LabelDefaults {
    pub fn from_toml(toml_str: &str) -> Result<Self, LabelError> {
        toml::from_str(toml_str).map_err(|e| LabelError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load the user config file, falling back to defaults if it is missing
    /// or invalid.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(defaults) => {
                tracing::info!("Loaded label defaults from {}", path.display());
                defaults
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "numbered-label").map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    /// Build the root environment.
    pub fn into_environment(self) -> Environment {
        let env = Environment::default()
            .with_size(self.size)
            .with_shape(self.shape)
            .with_style(self.style.style());
        match self.rounded_font {
            Some(family) => env.with_rounded_font(intern_family(family)),
            None => env,
        }
    }
}

/// iced font families are `&'static str`. Each distinct name is leaked once
/// and reused on later config loads.
fn intern_family(name: String) -> &'static str {
    static FAMILIES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    let mut families = FAMILIES
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(&family) = families.get(name.as_str()) {
        return family;
    }
    let family: &'static str = Box::leak(name.into_boxed_str());
    families.insert(family);
    family
}
