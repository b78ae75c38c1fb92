//! JSON theme files.
//!
//! ```json
//! { "themes": { "ocean": {
//!     "border": { "color": "#3C6E91", "hover_color": "#5FA8D3", "thickness": 1,
//!                 "rounding": 6, "shape": "rounded", "visible": true, "hover_visible": true },
//!     "font": { "family": "Segoe UI", "size": 8.25, "fore_color": "#222222" },
//!     "backgrounds": ["#F0F4F8", "#DCE6EE"],
//!     "gradients": { "progress": { "colors": ["#5FA8D3", "#3C6E91"], "angle": 90 } }
//! } } }
//! ```
//!
//! Every field is optional; whatever is missing comes from the base bundle.

use std::collections::BTreeMap;

use lacquer_engine::paint::Color;
use lacquer_engine::path::ShapeKind;
use lacquer_engine::text::FontStyle;
use serde::Deserialize;

use super::{BorderDescriptor, ControlGradients, FontDescriptor, GradientDescriptor, StyleBundle, ThemeError};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ThemeFile {
    pub themes: BTreeMap<String, ThemeDef>,
}

impl ThemeFile {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ThemeDef {
    border: Option<BorderDef>,
    font: Option<FontDef>,
    backgrounds: Option<Vec<String>>,
    gradients: Option<GradientsDef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BorderDef {
    color: Option<String>,
    hover_color: Option<String>,
    visible: Option<bool>,
    hover_visible: Option<bool>,
    thickness: Option<i64>,
    rounding: Option<i64>,
    shape: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FontDef {
    family: Option<String>,
    size: Option<f32>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    fore_color: Option<String>,
    fore_color_disabled: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GradientsDef {
    control_enabled: Option<GradientDef>,
    control_disabled: Option<GradientDef>,
    progress: Option<GradientDef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GradientDef {
    colors: Vec<String>,
    positions: Option<Vec<f32>>,
    angle: f32,
}

impl ThemeDef {
    /// Builds a bundle for theme `id`, taking missing fields from `base`.
    pub fn into_bundle(self, id: &str, base: &StyleBundle) -> Result<StyleBundle, ThemeError> {
        let mut bundle = base.clone();

        if let Some(def) = self.border {
            bundle = bundle.with_border(def.apply(id, base.border().clone())?);
        }
        if let Some(def) = self.font {
            bundle = bundle.with_font(def.apply(id, base.font().clone())?);
        }
        if let Some(values) = self.backgrounds {
            let colors = values.iter().map(|v| parse_color(id, v)).collect::<Result<Vec<_>, _>>()?;
            bundle = bundle.with_backgrounds(colors);
        }
        if let Some(def) = self.gradients {
            bundle = bundle.with_gradients(def.apply(id, base.gradients().clone())?);
        }
        Ok(bundle)
    }
}

impl BorderDef {
    fn apply(self, id: &str, mut border: BorderDescriptor) -> Result<BorderDescriptor, ThemeError> {
        if let Some(v) = self.color {
            border.set_color(parse_color(id, &v)?);
        }
        if let Some(v) = self.hover_color {
            border.set_hover_color(parse_color(id, &v)?);
        }
        if let Some(v) = self.visible {
            border.set_visible(v);
        }
        if let Some(v) = self.hover_visible {
            border.set_hover_visible(v);
        }
        if let Some(v) = self.thickness {
            border.set_thickness(v);
        }
        if let Some(v) = self.rounding {
            border.set_rounding(v);
        }
        if let Some(v) = self.shape {
            let shape = v
                .parse::<ShapeKind>()
                .map_err(|source| ThemeError::InvalidShape { theme: id.to_string(), source })?;
            border.set_shape(shape);
        }
        Ok(border)
    }
}

impl FontDef {
    fn apply(self, id: &str, mut font: FontDescriptor) -> Result<FontDescriptor, ThemeError> {
        if let Some(family) = self.family {
            font.font.family = family;
        }
        if let Some(size) = self.size.filter(|s| s.is_finite() && *s > 0.0) {
            font.font.size = size;
        }
        let style = font.font.style;
        font.font.style = FontStyle {
            bold: self.bold.unwrap_or(style.bold),
            italic: self.italic.unwrap_or(style.italic),
            underline: self.underline.unwrap_or(style.underline),
        };
        if let Some(v) = self.fore_color {
            font.fore_color = parse_color(id, &v)?;
        }
        if let Some(v) = self.fore_color_disabled {
            font.fore_color_disabled = parse_color(id, &v)?;
        }
        Ok(font)
    }
}

impl GradientsDef {
    fn apply(self, id: &str, mut gradients: ControlGradients) -> Result<ControlGradients, ThemeError> {
        if let Some(def) = self.control_enabled {
            gradients.control_enabled = def.build(id)?;
        }
        if let Some(def) = self.control_disabled {
            gradients.control_disabled = def.build(id)?;
        }
        if let Some(def) = self.progress {
            gradients.progress = def.build(id)?;
        }
        Ok(gradients)
    }
}

impl GradientDef {
    fn build(self, id: &str) -> Result<GradientDescriptor, ThemeError> {
        let colors = self.colors.iter().map(|v| parse_color(id, v)).collect::<Result<Vec<_>, _>>()?;
        GradientDescriptor::from_colors(&colors, self.positions.as_deref(), self.angle)
            .map_err(|source| ThemeError::Style { theme: id.to_string(), source })
    }
}

fn parse_color(theme: &str, value: &str) -> Result<Color, ThemeError> {
    Color::from_hex(value)
        .ok_or_else(|| ThemeError::InvalidColor { theme: theme.to_string(), value: value.to_string() })
}
