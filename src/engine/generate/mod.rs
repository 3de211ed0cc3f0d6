//! Code generation from component specs and tokens.
//!
//! Every generator is a pure function: the same spec, variant and options
//! always produce byte-identical text. Generators are pattern-based string
//! builders; nothing here validates output against a real CSS, Tailwind or
//! framework compiler.
//!
//! - [`css`] - CSS rule blocks for one component variant
//! - [`tailwind`] - flattened utility class strings
//! - [`variables`] - `:root` custom properties from the token set
//! - [`skeleton`] - html / react / vue / svelte component skeletons

pub mod css;
pub mod skeleton;
pub mod tailwind;
pub mod variables;

pub use css::{component_css, generate_css, CssOptions};
pub use skeleton::{component_skeleton, generate_skeleton, Framework, GenerateError};
pub use tailwind::{component_classes, generate_tailwind, TailwindClasses};
pub use variables::generate_css_variables;

use crate::catalog::Palette;

/// Variant used when the caller names none.
pub const DEFAULT_VARIANT: &str = "default";

/// Size used when the caller names none.
pub const DEFAULT_SIZE: &str = "default";

/// Resolves a color-like value against the given palettes.
///
/// The value is tried as a token key in each palette in turn; if no palette
/// has it, the value is returned as a literal CSS color.
#[must_use]
pub fn resolve_color_like(value: &str, palettes: &[&Palette]) -> String {
    palettes
        .iter()
        .find_map(|palette| palette.get(value))
        .map_or_else(|| value.to_string(), |token| token.value.clone())
}

/// Converts `primaryForeground`, `date_picker` or `Date Picker` to `date-picker` style.
pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if previous_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            previous_lower = false;
        } else if c == '_' || c == ' ' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            previous_lower = false;
        } else {
            out.push(c);
            previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out.trim_end_matches('-').to_string()
}

/// Converts `date-picker` or `dialog` to `DatePicker` / `Dialog`.
pub(crate) fn pascal_case(name: &str) -> String {
    kebab_case(name)
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorToken;

    fn palette(entries: &[(&str, &str)]) -> Palette {
        entries
            .iter()
            .map(|(k, v)| {
                (
                    (*k).to_string(),
                    ColorToken {
                        value: (*v).to_string(),
                        usage: String::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn color_like_prefers_token() {
        let light = palette(&[("primary", "#0d2872")]);
        assert_eq!(resolve_color_like("primary", &[&light]), "#0d2872");
    }

    #[test]
    fn color_like_falls_back_to_literal() {
        let light = palette(&[("primary", "#0d2872")]);
        assert_eq!(resolve_color_like("#ff0000", &[&light]), "#ff0000");
        assert_eq!(resolve_color_like("transparent", &[]), "transparent");
    }

    #[test]
    fn color_like_searches_palettes_in_order() {
        let light = palette(&[("success", "#111111")]);
        let semantic = palette(&[("success", "#16a34a"), ("info", "#0284c7")]);
        assert_eq!(resolve_color_like("success", &[&light, &semantic]), "#111111");
        assert_eq!(resolve_color_like("info", &[&light, &semantic]), "#0284c7");
    }

    #[test]
    fn case_conversions() {
        assert_eq!(kebab_case("button"), "button");
        assert_eq!(kebab_case("primaryForeground"), "primary-foreground");
        assert_eq!(kebab_case("date_picker"), "date-picker");
        assert_eq!(kebab_case("stat-card"), "stat-card");
        assert_eq!(kebab_case("chart1"), "chart1");
        assert_eq!(pascal_case("stat-card"), "StatCard");
        assert_eq!(pascal_case("dialog"), "Dialog");
        assert_eq!(pascal_case("dropdownMenu"), "DropdownMenu");
    }
}
