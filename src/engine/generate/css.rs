//! CSS rule generation for a component variant.
//!
//! Output blocks always appear in this order:
//!
//! 1. base rule (base styles, then variant colors and border, then default size)
//! 2. `:hover`
//! 3. `:focus-visible`
//! 4. `:disabled`
//! 5. `@media (prefers-color-scheme: dark)`
//!
//! Blocks 2-5 are omitted when the component spec or the options do not call for them.

use std::fmt::Write;

use crate::catalog::{CategoryMap, ComponentSpec, DesignTokens, Variant};
use crate::engine::resolve::{resolve, LookupError};

use super::{kebab_case, resolve_color_like, DEFAULT_SIZE};

const FALLBACK_DISPLAY: &str = "inline-flex";
const FALLBACK_ALIGN_ITEMS: &str = "center";
const FALLBACK_JUSTIFY_CONTENT: &str = "center";
const FALLBACK_FONT_SIZE: &str = "0.875rem";
const FALLBACK_FONT_WEIGHT: &str = "500";
const FALLBACK_RADIUS: &str = "0.375rem";
const FALLBACK_DURATION: &str = "150ms";
const FALLBACK_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const FALLBACK_BORDER: &str = "#e5e7eb";
const FALLBACK_HEIGHT: &str = "40px";
const FALLBACK_PADDING: &str = "0 16px";
const FALLBACK_RING_OFFSET: &str = "#ffffff";
const FALLBACK_RING: &str = "#3b82f6";

/// Which optional blocks to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssOptions {
    /// Emit a `:hover` block when the variant declares `hover`.
    pub include_hover: bool,
    /// Emit a `:focus-visible` block when the component spec declares `states.focus`.
    pub include_focus: bool,
    /// Emit a dark-mode media block when the background has a dark token.
    pub include_dark_mode: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            include_hover: true,
            include_focus: true,
            include_dark_mode: false,
        }
    }
}

/// Generates CSS for `component` from the catalog.
///
/// # Errors
///
/// Returns a [`LookupError`] if the component is not in the catalog.
pub fn generate_css(
    tokens: &DesignTokens,
    components: &CategoryMap<ComponentSpec>,
    component: &str,
    variant: &str,
    options: CssOptions,
) -> Result<String, LookupError> {
    let spec = resolve(components, component, "Component")?;
    Ok(component_css(tokens, component, spec, variant, options))
}

/// Generates CSS for an already resolved spec.
///
/// An unknown `variant` contributes no declarations.
#[must_use]
pub fn component_css(
    tokens: &DesignTokens,
    name: &str,
    spec: &ComponentSpec,
    variant: &str,
    options: CssOptions,
) -> String {
    let selector = format!(".{}", kebab_case(name));
    let variant = spec.variants.get(variant);
    let light = &tokens.colors.light;

    let mut declarations = Vec::new();
    base_declarations(tokens, spec, &mut declarations);
    if let Some(variant) = variant {
        variant_declarations(tokens, variant, &mut declarations);
    }
    if let Some(size) = spec.sizes.get(DEFAULT_SIZE) {
        declarations.push((
            "height",
            size.height.clone().unwrap_or_else(|| FALLBACK_HEIGHT.to_string()),
        ));
        declarations.push((
            "padding",
            size.padding.clone().unwrap_or_else(|| FALLBACK_PADDING.to_string()),
        ));
    }

    let mut css = String::new();
    write_rule(&mut css, &selector, &declarations);

    if options.include_hover && variant.and_then(Variant::hover).is_some() {
        css.push('\n');
        write_rule(
            &mut css,
            &format!("{selector}:hover"),
            &[("opacity", "0.9".to_string())],
        );
    }

    if options.include_focus && spec.states.contains_key("focus") {
        let offset = light
            .get("background")
            .map_or(FALLBACK_RING_OFFSET, |t| t.value.as_str());
        let ring = light.get("ring").map_or(FALLBACK_RING, |t| t.value.as_str());
        css.push('\n');
        write_rule(
            &mut css,
            &format!("{selector}:focus-visible"),
            &[
                ("outline", "none".to_string()),
                ("box-shadow", format!("0 0 0 2px {offset}, 0 0 0 4px {ring}")),
            ],
        );
    }

    if spec.states.contains_key("disabled") {
        css.push('\n');
        write_rule(
            &mut css,
            &format!("{selector}:disabled"),
            &[
                ("opacity", "0.5".to_string()),
                ("cursor", "not-allowed".to_string()),
                ("pointer-events", "none".to_string()),
            ],
        );
    }

    if options.include_dark_mode {
        let dark_background = variant
            .and_then(|v| v.background.as_deref())
            .and_then(|key| tokens.colors.dark.get(key));
        if let Some(token) = dark_background {
            css.push('\n');
            css.push_str("@media (prefers-color-scheme: dark) {\n");
            let _ = writeln!(css, "  {selector} {{");
            let _ = writeln!(css, "    background-color: {};", token.value);
            css.push_str("  }\n}\n");
        }
    }

    css
}

fn base_declarations(
    tokens: &DesignTokens,
    spec: &ComponentSpec,
    declarations: &mut Vec<(&'static str, String)>,
) {
    let Some(base) = &spec.base_styles else {
        return;
    };

    let or = |value: &Option<String>, fallback: &str| {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };

    declarations.push(("display", or(&base.display, FALLBACK_DISPLAY)));
    declarations.push(("align-items", or(&base.align_items, FALLBACK_ALIGN_ITEMS)));
    declarations.push((
        "justify-content",
        or(&base.justify_content, FALLBACK_JUSTIFY_CONTENT),
    ));

    let font_size = tokens
        .typography
        .font_size
        .get("sm")
        .map_or(FALLBACK_FONT_SIZE, |s| s.value.as_str());
    declarations.push(("font-size", font_size.to_string()));

    let font_weight = match &base.font_weight {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        _ => FALLBACK_FONT_WEIGHT.to_string(),
    };
    declarations.push(("font-weight", font_weight));

    let radius = tokens
        .border_radius
        .get("md")
        .map_or(FALLBACK_RADIUS, String::as_str);
    declarations.push(("border-radius", radius.to_string()));

    let duration = tokens
        .animation
        .duration
        .get("fast")
        .map_or(FALLBACK_DURATION, String::as_str);
    let easing = tokens
        .animation
        .easing
        .get("default")
        .map_or(FALLBACK_EASING, String::as_str);
    declarations.push(("transition", format!("all {duration} {easing}")));
}

fn variant_declarations(
    tokens: &DesignTokens,
    variant: &Variant,
    declarations: &mut Vec<(&'static str, String)>,
) {
    let palettes = [&tokens.colors.light, &tokens.colors.semantic];

    if let Some(background) = &variant.background {
        declarations.push(("background-color", resolve_color_like(background, &palettes)));
    }
    if let Some(color) = &variant.color {
        declarations.push(("color", resolve_color_like(color, &palettes)));
    }
    if variant.has_border() {
        let border = tokens
            .colors
            .light
            .get("border")
            .map_or(FALLBACK_BORDER, |t| t.value.as_str());
        declarations.push(("border", format!("1px solid {border}")));
    }
}

fn write_rule(css: &mut String, selector: &str, declarations: &[(&str, String)]) {
    let _ = writeln!(css, "{selector} {{");
    for (property, value) in declarations {
        let _ = writeln!(css, "  {property}: {value};");
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn fixture() -> (DesignTokens, CategoryMap<ComponentSpec>) {
        let store = CatalogStore::embedded();
        (
            store.tokens().unwrap().clone(),
            store.components().unwrap().clone(),
        )
    }

    fn all_blocks() -> CssOptions {
        CssOptions {
            include_hover: true,
            include_focus: true,
            include_dark_mode: true,
        }
    }

    #[test]
    fn button_default_exact_output() {
        let (tokens, components) = fixture();
        let css = generate_css(&tokens, &components, "button", "default", CssOptions::default())
            .unwrap();

        let expected = "\
.button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-size: 0.875rem;
  font-weight: 500;
  border-radius: 0.375rem;
  transition: all 150ms cubic-bezier(0.4, 0, 0.2, 1);
  background-color: #0d2872;
  color: #f8fafc;
  height: 40px;
  padding: 0 16px;
}

.button:hover {
  opacity: 0.9;
}

.button:focus-visible {
  outline: none;
  box-shadow: 0 0 0 2px #ffffff, 0 0 0 4px #3b5bdb;
}

.button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  pointer-events: none;
}
";
        assert_eq!(css, expected);
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let (tokens, components) = fixture();
        let css = generate_css(&tokens, &components, "button", "default", all_blocks()).unwrap();

        let positions: Vec<usize> = [
            ".button {",
            "background-color: #0d2872;",
            "height: 40px;",
            ".button:hover {",
            ".button:focus-visible {",
            ".button:disabled {",
            "@media (prefers-color-scheme: dark) {",
        ]
        .iter()
        .map(|needle| css.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{css}");
        // Variant and size declarations live inside the base rule.
        let base_end = css.find("}\n").unwrap();
        assert!(positions[1] < base_end && positions[2] < base_end);
        assert!(css.contains("    background-color: #93c5fd;"));
    }

    #[test]
    fn output_is_deterministic() {
        let (tokens, components) = fixture();
        let first = generate_css(&tokens, &components, "button", "outline", all_blocks()).unwrap();
        let second = generate_css(&tokens, &components, "button", "outline", all_blocks()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn border_uses_border_token() {
        let (tokens, components) = fixture();
        let css = generate_css(&tokens, &components, "button", "outline", CssOptions::default())
            .unwrap();
        assert!(css.contains("  border: 1px solid #e2e8f0;\n"));
        assert!(css.contains("  background-color: #ffffff;\n"));
    }

    #[test]
    fn semantic_palette_resolves_variant_colors() {
        let (tokens, components) = fixture();
        let css = generate_css(&tokens, &components, "badge", "success", CssOptions::default())
            .unwrap();
        assert!(css.contains("background-color: #16a34a;"));
        assert!(css.contains("color: #f0fdf4;"));
        assert!(css.contains("font-weight: 600;"));
        // Badge declares no states, so no focus or disabled blocks.
        assert!(!css.contains(":focus-visible"));
        assert!(!css.contains(":disabled"));
    }

    #[test]
    fn options_suppress_hover_and_focus_but_not_disabled() {
        let (tokens, components) = fixture();
        let options = CssOptions {
            include_hover: false,
            include_focus: false,
            include_dark_mode: false,
        };
        let css = generate_css(&tokens, &components, "button", "default", options).unwrap();
        assert!(!css.contains(":hover"));
        assert!(!css.contains(":focus-visible"));
        assert!(css.contains(".button:disabled {"));
    }

    #[test]
    fn hover_requires_variant_hover() {
        let (tokens, components) = fixture();
        let css = generate_css(&tokens, &components, "button", "link", CssOptions::default())
            .unwrap();
        assert!(!css.contains(":hover"));
    }

    #[test]
    fn dark_block_omitted_without_dark_token() {
        let (tokens, components) = fixture();
        // The ghost variant has no background at all.
        let css = generate_css(&tokens, &components, "button", "ghost", all_blocks()).unwrap();
        assert!(!css.contains("@media"));
    }

    #[test]
    fn literal_colors_pass_through() {
        let (tokens, _) = fixture();
        let spec: ComponentSpec = serde_json::from_str(
            r##"{ "variants": { "default": { "background": "#123456", "color": "white" } } }"##,
        )
        .unwrap();
        let css = component_css(&tokens, "swatch", &spec, "default", all_blocks());
        assert_eq!(
            css,
            ".swatch {\n  background-color: #123456;\n  color: white;\n}\n"
        );
    }

    #[test]
    fn fallbacks_apply_when_spec_omits_values() {
        let (tokens, _) = fixture();
        let spec: ComponentSpec = serde_json::from_str(
            r#"{ "baseStyles": {}, "sizes": { "default": {} } }"#,
        )
        .unwrap();
        let css = component_css(&tokens, "chipInput", &spec, "default", CssOptions::default());
        assert!(css.starts_with(".chip-input {\n  display: inline-flex;\n  align-items: center;\n  justify-content: center;\n"));
        assert!(css.contains("  font-weight: 500;\n"));
        assert!(css.contains("  height: 40px;\n  padding: 0 16px;\n"));
    }

    #[test]
    fn unknown_component_is_an_error() {
        let (tokens, components) = fixture();
        let err = generate_css(&tokens, &components, "sparkle", "default", CssOptions::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Component 'sparkle' not found"));
        assert!(err.available().contains(&"button".to_string()));
    }
}
