//! CSS custom properties from the token set.

use std::fmt::Write;

use serde_json::Value;

use crate::catalog::{DesignTokens, Palette};

use super::kebab_case;

/// Generates a stylesheet of CSS variables.
///
/// The `:root` block lists sections in a fixed order: light colors (only
/// with `include_light`), semantic colors, font families, font sizes,
/// spacing, radii, shadows, durations and z-index layers. With
/// `include_dark` the dark palette is emitted twice, once under
/// `prefers-color-scheme` and once under a `.dark` class, so both automatic
/// and manually toggled dark mode work.
#[must_use]
pub fn generate_css_variables(tokens: &DesignTokens, include_light: bool, include_dark: bool) -> String {
    let mut css = String::from(":root {\n");

    if include_light {
        section(&mut css, "Light colors");
        palette_variables(&mut css, &tokens.colors.light, "  ");
    }

    section(&mut css, "Semantic colors");
    palette_variables(&mut css, &tokens.colors.semantic, "  ");

    section(&mut css, "Typography");
    for (name, family) in &tokens.typography.font_family {
        variable(&mut css, "  ", &format!("font-{}", kebab_case(name)), family);
    }
    for (name, size) in &tokens.typography.font_size {
        variable(&mut css, "  ", &format!("text-{name}"), &size.value);
    }

    section(&mut css, "Spacing");
    for (name, value) in &tokens.spacing.scale {
        variable(&mut css, "  ", &format!("spacing-{}", name.replace('.', "_")), value);
    }

    section(&mut css, "Border radius");
    for (name, value) in &tokens.border_radius {
        variable(&mut css, "  ", &format!("radius-{name}"), value);
    }

    section(&mut css, "Shadows");
    for (name, shadow) in &tokens.shadows {
        if let Some(value) = shadow.get("value").and_then(Value::as_str) {
            variable(&mut css, "  ", &format!("shadow-{name}"), value);
        }
    }

    section(&mut css, "Animation");
    for (name, value) in &tokens.animation.duration {
        variable(&mut css, "  ", &format!("duration-{name}"), value);
    }

    section(&mut css, "Z-index");
    for (name, layer) in &tokens.z_index {
        if let Value::Number(n) = layer {
            variable(&mut css, "  ", &format!("z-{name}"), &n.to_string());
        }
    }

    css.push_str("}\n");

    if include_dark {
        css.push_str("\n@media (prefers-color-scheme: dark) {\n  :root {\n");
        palette_variables(&mut css, &tokens.colors.dark, "    ");
        css.push_str("  }\n}\n");

        css.push_str("\n.dark {\n");
        palette_variables(&mut css, &tokens.colors.dark, "  ");
        css.push_str("}\n");
    }

    css
}

fn section(css: &mut String, title: &str) {
    let _ = writeln!(css, "  /* {title} */");
}

fn palette_variables(css: &mut String, palette: &Palette, indent: &str) {
    for (name, token) in palette {
        variable(css, indent, &format!("color-{}", kebab_case(name)), &token.value);
    }
}

fn variable(css: &mut String, indent: &str, name: &str, value: &str) {
    let _ = writeln!(css, "{indent}--{name}: {value};");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn tokens() -> DesignTokens {
        CatalogStore::embedded().tokens().unwrap().clone()
    }

    #[test]
    fn sections_appear_in_order() {
        let css = generate_css_variables(&tokens(), true, false);
        let order = [
            "/* Light colors */",
            "/* Semantic colors */",
            "/* Typography */",
            "/* Spacing */",
            "/* Border radius */",
            "/* Shadows */",
            "/* Animation */",
            "/* Z-index */",
        ];
        let positions: Vec<_> = order.iter().map(|s| css.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!css.contains(".dark"));
    }

    #[test]
    fn emits_expected_variables() {
        let css = generate_css_variables(&tokens(), true, false);
        assert!(css.contains("  --color-primary: #0d2872;\n"));
        assert!(css.contains("  --color-primary-foreground: #f8fafc;\n"));
        assert!(css.contains("  --color-success: #16a34a;\n"));
        assert!(css.contains("  --font-sans: Inter, ui-sans-serif, system-ui, sans-serif;\n"));
        assert!(css.contains("  --text-sm: 0.875rem;\n"));
        assert!(css.contains("  --spacing-4: 1rem;\n"));
        assert!(css.contains("  --radius-md: 0.375rem;\n"));
        assert!(css.contains("  --duration-fast: 150ms;\n"));
        assert!(css.contains("  --z-modal: 1400;\n"));
    }

    #[test]
    fn skips_bare_shadows_and_non_numeric_layers() {
        let css = generate_css_variables(&tokens(), true, true);
        assert!(css.contains("--shadow-sm:"));
        assert!(!css.contains("--shadow-none"));
        assert!(!css.contains("--z-auto"));
    }

    #[test]
    fn light_colors_can_be_left_out() {
        let css = generate_css_variables(&tokens(), false, false);
        assert!(!css.contains("--color-primary:"));
        assert!(css.contains("--color-success:"));
    }

    #[test]
    fn dark_blocks_are_identical() {
        let css = generate_css_variables(&tokens(), true, true);
        let media_start = css.find("@media (prefers-color-scheme: dark) {").unwrap();
        let class_start = css.find("\n.dark {\n").unwrap();
        assert!(media_start < class_start);

        let media_vars: Vec<_> = css[media_start..class_start]
            .lines()
            .filter(|l| l.trim_start().starts_with("--"))
            .map(str::trim)
            .collect();
        let class_vars: Vec<_> = css[class_start..]
            .lines()
            .filter(|l| l.trim_start().starts_with("--"))
            .map(str::trim)
            .collect();

        assert!(!media_vars.is_empty());
        assert_eq!(media_vars, class_vars);
        assert!(media_vars.contains(&"--color-primary: #93c5fd;"));
    }

    #[test]
    fn output_is_deterministic() {
        let tokens = tokens();
        assert_eq!(
            generate_css_variables(&tokens, true, true),
            generate_css_variables(&tokens, true, true)
        );
    }
}
