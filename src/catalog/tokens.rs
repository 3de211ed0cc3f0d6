//! Design tokens.
//!
//! The token set is a fixed-shape aggregate: every scale maps a small set of
//! semantic keys (`sm`, `md`, `lg`, ...) to concrete values. [`DesignTokens::validate`]
//! rejects documents with an empty scale.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CategoryMap;

/// Names of the token sections, in document order.
pub const TOKEN_SECTIONS: [&str; 9] = [
    "colors",
    "typography",
    "spacing",
    "borderRadius",
    "shadows",
    "animation",
    "zIndex",
    "breakpoints",
    "containers",
];

/// Pixels per `rem` used when converting scale values.
pub const REM_BASE_PX: f64 = 16.0;

/// A color palette keyed by token name.
pub type Palette = IndexMap<String, ColorToken>;

/// The complete token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// Color palettes.
    pub colors: ColorTokens,
    /// Font families, size scale and weight scale.
    pub typography: Typography,
    /// Spacing base unit and scale.
    pub spacing: Spacing,
    /// Border radius scale.
    pub border_radius: IndexMap<String, String>,
    /// Shadow scale. Entries are `{value, usage}` objects or bare values.
    pub shadows: IndexMap<String, Value>,
    /// Animation durations, easings and keyframes.
    pub animation: Animation,
    /// Stacking layers. Entries are expected to be numbers.
    pub z_index: IndexMap<String, Value>,
    /// Responsive breakpoints.
    pub breakpoints: IndexMap<String, String>,
    /// Container widths.
    pub containers: IndexMap<String, String>,
}

/// Color palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    /// Light mode palette.
    pub light: Palette,
    /// Dark mode palette.
    pub dark: Palette,
    /// Semantic status colors (success, warning, ...).
    pub semantic: Palette,
    /// Data visualisation palette.
    pub chart: Palette,
}

/// A single color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Canonical CSS value (`#rrggbb`).
    pub value: String,
    /// Usage note.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage: String,
}

/// Typography scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font family stacks.
    pub font_family: IndexMap<String, String>,
    /// Font size scale.
    pub font_size: IndexMap<String, FontSize>,
    /// Font weight scale.
    pub font_weight: IndexMap<String, Value>,
}

/// An entry of the font size scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSize {
    /// CSS font size.
    pub value: String,
    /// Paired line height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

/// Spacing scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    /// Grid unit every scale value is a multiple of.
    pub base_unit: String,
    /// Named spacing values.
    pub scale: IndexMap<String, String>,
}

/// Animation tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Named durations.
    pub duration: IndexMap<String, String>,
    /// Named easing curves.
    pub easing: IndexMap<String, String>,
    /// Keyframe definitions.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub keyframes: IndexMap<String, Value>,
}

impl DesignTokens {
    /// Checks that no scale is empty.
    ///
    /// # Errors
    ///
    /// Returns a description of the first empty scale.
    pub fn validate(&self) -> Result<(), String> {
        let scales = [
            ("colors.light", self.colors.light.len()),
            ("colors.dark", self.colors.dark.len()),
            ("colors.semantic", self.colors.semantic.len()),
            ("colors.chart", self.colors.chart.len()),
            ("typography.fontFamily", self.typography.font_family.len()),
            ("typography.fontSize", self.typography.font_size.len()),
            ("typography.fontWeight", self.typography.font_weight.len()),
            ("spacing.scale", self.spacing.scale.len()),
            ("borderRadius", self.border_radius.len()),
            ("shadows", self.shadows.len()),
            ("animation.duration", self.animation.duration.len()),
            ("animation.easing", self.animation.easing.len()),
            ("zIndex", self.z_index.len()),
            ("breakpoints", self.breakpoints.len()),
            ("containers", self.containers.len()),
        ];

        match scales.iter().find(|(_, len)| *len == 0) {
            Some((name, _)) => Err(format!("{name} scale is empty")),
            None => Ok(()),
        }
    }

    /// Returns the token set as a map from section name to section value.
    ///
    /// # Errors
    ///
    /// Returns an error if a section fails to serialise.
    pub fn sections(&self) -> serde_json::Result<CategoryMap<Value>> {
        let values = [
            serde_json::to_value(&self.colors)?,
            serde_json::to_value(&self.typography)?,
            serde_json::to_value(&self.spacing)?,
            serde_json::to_value(&self.border_radius)?,
            serde_json::to_value(&self.shadows)?,
            serde_json::to_value(&self.animation)?,
            serde_json::to_value(&self.z_index)?,
            serde_json::to_value(&self.breakpoints)?,
            serde_json::to_value(&self.containers)?,
        ];

        Ok(TOKEN_SECTIONS
            .iter()
            .map(|name| (*name).to_string())
            .zip(values)
            .collect())
    }
}

/// Converts a CSS length to pixels.
///
/// Understands `px`, `rem` (at [`REM_BASE_PX`]) and a unitless `0`.
#[must_use]
pub fn length_to_px(value: &str) -> Option<f64> {
    let value = value.trim().to_lowercase();
    if let Some(rem) = value.strip_suffix("rem") {
        return rem.trim().parse::<f64>().ok().map(|r| r * REM_BASE_PX);
    }
    if let Some(px) = value.strip_suffix("px") {
        return px.trim().parse::<f64>().ok();
    }
    value.parse::<f64>().ok().filter(|v| *v == 0.0)
}

/// Formats a pixel magnitude as a CSS length (`16px`, `0.5px`).
#[must_use]
pub fn format_px(px: f64) -> String {
    if px.fract() == 0.0 {
        format!("{px:.0}px")
    } else {
        format!("{px}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_conversion() {
        assert_eq!(length_to_px("1rem"), Some(16.0));
        assert_eq!(length_to_px("0.25rem"), Some(4.0));
        assert_eq!(length_to_px(" 12PX "), Some(12.0));
        assert_eq!(length_to_px("0"), Some(0.0));
        assert_eq!(length_to_px("12"), None);
        assert_eq!(length_to_px("auto"), None);
    }

    #[test]
    fn px_formatting() {
        assert_eq!(format_px(16.0), "16px");
        assert_eq!(format_px(0.0), "0px");
        assert_eq!(format_px(2.5), "2.5px");
    }
}
