//! Component skeleton markup for html, React, Vue and Svelte.
//!
//! Compound components (those with sub-parts) render one wrapper per part.
//! Leaf components render a single `<button>`; the framework flavours expose
//! typed `variant` and `size` props backed by class lookup tables.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::{CategoryMap, ComponentSpec};
use crate::engine::resolve::{resolve, LookupError};

use super::tailwind::{component_classes, variant_classes};
use super::{kebab_case, pascal_case, DEFAULT_SIZE, DEFAULT_VARIANT};

/// Errors from skeleton generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The component is not in the catalog.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The requested framework is not supported.
    #[error("Unknown framework '{framework}'. Supported: html, react, vue, svelte")]
    UnknownFramework {
        /// The framework name as given.
        framework: String,
    },
}

impl GenerateError {
    /// Valid alternatives for the failed request.
    #[must_use]
    pub fn available(&self) -> Vec<String> {
        match self {
            Self::Lookup(e) => e.available().to_vec(),
            Self::UnknownFramework { .. } => Framework::ALL.iter().map(|f| f.name().to_string()).collect(),
        }
    }
}

/// Markup flavour of a skeleton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Plain HTML.
    #[default]
    Html,
    /// React function component in TSX.
    React,
    /// Vue single-file component.
    Vue,
    /// Svelte component.
    Svelte,
}

impl Framework {
    /// Every supported framework.
    pub const ALL: [Self; 4] = [Self::Html, Self::React, Self::Vue, Self::Svelte];

    /// Canonical lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GenerateError::UnknownFramework {
                framework: s.to_string(),
            })
    }
}

/// Generates a skeleton for `component` from the catalog.
///
/// # Errors
///
/// Returns [`GenerateError::Lookup`] if the component is not in the catalog.
pub fn generate_skeleton(
    components: &CategoryMap<ComponentSpec>,
    component: &str,
    framework: Framework,
    variant: &str,
) -> Result<String, GenerateError> {
    let spec = resolve(components, component, "Component")?;
    Ok(component_skeleton(component, spec, framework, variant))
}

/// Renders a skeleton for an already resolved spec.
///
/// An unknown `variant` falls back to the default variant.
#[must_use]
pub fn component_skeleton(name: &str, spec: &ComponentSpec, framework: Framework, variant: &str) -> String {
    let variant = if spec.variants.contains_key(variant) {
        variant
    } else {
        DEFAULT_VARIANT
    };

    match (spec.is_compound(), framework) {
        (true, Framework::Html) => compound_html(name, spec),
        (true, Framework::React) => compound_react(name, spec),
        (true, Framework::Vue) => compound_template(name, spec, "<template>\n", "</template>\n", 1),
        (true, Framework::Svelte) => compound_template(name, spec, "", "", 0),
        (false, Framework::Html) => leaf_html(name, spec, variant),
        (false, Framework::React) => leaf_react(name, spec, variant),
        (false, Framework::Vue) => leaf_vue(spec, variant),
        (false, Framework::Svelte) => leaf_svelte(spec, variant),
    }
}

fn compound_html(name: &str, spec: &ComponentSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<div class=\"{}\" data-component=\"{}\">",
        root_classes(spec),
        kebab_case(name)
    );
    for (part, sub) in parts(spec) {
        let _ = writeln!(out, "  <div class=\"{sub}\" data-part=\"{part}\"></div>");
    }
    out.push_str("</div>\n");
    out
}

fn compound_react(name: &str, spec: &ComponentSpec) -> String {
    let root = pascal_case(name);
    let mut out = String::from(
        "import * as React from \"react\";\n\n\
         type PartProps = React.HTMLAttributes<HTMLDivElement>;\n\n\
         const cx = (...classes: Array<string | undefined>) => classes.filter(Boolean).join(\" \");\n",
    );

    let _ = write!(
        out,
        "\nexport function {root}({{ className, ...props }}: PartProps) {{\n  \
         return <div className={{cx({}, className)}} data-component=\"{}\" {{...props}} />;\n}}\n",
        js_string(&root_classes(spec)),
        kebab_case(name)
    );

    for (part, sub) in parts(spec) {
        let _ = write!(
            out,
            "\nexport function {root}{}({{ className, ...props }}: PartProps) {{\n  \
             return <div className={{cx({}, className)}} data-part=\"{part}\" {{...props}} />;\n}}\n",
            pascal_case(part),
            js_string(sub)
        );
    }
    out
}

/// Vue and Svelte share the slot-based compound layout.
fn compound_template(name: &str, spec: &ComponentSpec, open: &str, close: &str, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let mut out = String::from(open);
    let _ = writeln!(
        out,
        "{pad}<div class=\"{}\" data-component=\"{}\">",
        root_classes(spec),
        kebab_case(name)
    );
    for (part, sub) in parts(spec) {
        let _ = writeln!(out, "{pad}  <div class=\"{sub}\" data-part=\"{part}\">");
        let _ = writeln!(out, "{pad}    <slot name=\"{part}\" />");
        let _ = writeln!(out, "{pad}  </div>");
    }
    let _ = writeln!(out, "{pad}</div>");
    out.push_str(close);
    out
}

fn leaf_html(name: &str, spec: &ComponentSpec, variant: &str) -> String {
    let classes = component_classes(spec, variant, DEFAULT_SIZE).classes;
    format!(
        "<button type=\"button\" class=\"{classes}\">\n  {}\n</button>\n",
        pascal_case(name)
    )
}

fn leaf_react(name: &str, spec: &ComponentSpec, variant: &str) -> String {
    let component = pascal_case(name);
    let tables = LeafTables::new(spec);
    let mut out = String::from("import * as React from \"react\";\n\n");

    let _ = writeln!(out, "type {component}Variant = {};", tables.variant_union());
    let _ = writeln!(out, "type {component}Size = {};\n", tables.size_union());
    let _ = writeln!(
        out,
        "interface {component}Props extends React.ButtonHTMLAttributes<HTMLButtonElement> {{"
    );
    let _ = writeln!(out, "  variant?: {component}Variant;");
    let _ = writeln!(out, "  size?: {component}Size;");
    out.push_str("}\n\n");
    tables.write_consts(&mut out, "", &format!("{component}Variant"), &format!("{component}Size"));

    let _ = write!(
        out,
        "\nexport function {component}({{\n  \
         variant = {},\n  \
         size = {},\n  \
         className,\n  \
         ...props\n\
         }}: {component}Props) {{\n  \
         return (\n    \
         <button\n      \
         className={{[baseClasses, variantClasses[variant], sizeClasses[size], className]\n        \
         .filter(Boolean)\n        \
         .join(\" \")}}\n      \
         {{...props}}\n    \
         />\n  \
         );\n\
         }}\n",
        js_string(variant),
        js_string(tables.default_size()),
    );
    out
}

fn leaf_vue(spec: &ComponentSpec, variant: &str) -> String {
    let tables = LeafTables::new(spec);
    let mut out = String::from("<script setup lang=\"ts\">\n");

    let _ = writeln!(out, "type Variant = {};", tables.variant_union());
    let _ = writeln!(out, "type Size = {};\n", tables.size_union());
    out.push_str("const props = withDefaults(defineProps<{ variant?: Variant; size?: Size }>(), {\n");
    let _ = writeln!(out, "  variant: {},", js_string(variant));
    let _ = writeln!(out, "  size: {},", js_string(tables.default_size()));
    out.push_str("});\n\n");
    tables.write_consts(&mut out, "", "Variant", "Size");
    out.push_str(
        "</script>\n\n\
         <template>\n  \
         <button type=\"button\" :class=\"[baseClasses, variantClasses[props.variant], sizeClasses[props.size]]\">\n    \
         <slot />\n  \
         </button>\n\
         </template>\n",
    );
    out
}

fn leaf_svelte(spec: &ComponentSpec, variant: &str) -> String {
    let tables = LeafTables::new(spec);
    let mut out = String::from("<script lang=\"ts\">\n");

    let _ = writeln!(out, "  type Variant = {};", tables.variant_union());
    let _ = writeln!(out, "  type Size = {};\n", tables.size_union());
    let _ = writeln!(out, "  export let variant: Variant = {};", js_string(variant));
    let _ = writeln!(out, "  export let size: Size = {};\n", js_string(tables.default_size()));
    tables.write_consts(&mut out, "  ", "Variant", "Size");
    out.push_str(
        "</script>\n\n\
         <button type=\"button\" class=\"{baseClasses} {variantClasses[variant]} {sizeClasses[size]}\" on:click>\n  \
         <slot />\n\
         </button>\n",
    );
    out
}

/// Class lookup tables shared by the framework flavours of a leaf skeleton.
struct LeafTables {
    base: String,
    variants: Vec<(String, String)>,
    sizes: Vec<(String, String)>,
}

impl LeafTables {
    fn new(spec: &ComponentSpec) -> Self {
        let base = [
            spec.base_styles.as_ref().and_then(|b| b.classes.as_deref()),
            spec.state_classes("focus"),
            spec.state_classes("disabled"),
            spec.properties.as_ref().and_then(|p| p.classes.as_deref()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        let mut variants: Vec<_> = spec
            .variants
            .iter()
            .map(|(name, v)| (name.clone(), variant_classes(v)))
            .collect();
        if variants.is_empty() {
            variants.push((DEFAULT_VARIANT.to_string(), String::new()));
        }

        let mut sizes: Vec<_> = spec
            .sizes
            .iter()
            .map(|(name, s)| (name.clone(), s.classes.clone().unwrap_or_default()))
            .collect();
        if sizes.is_empty() {
            sizes.push((DEFAULT_SIZE.to_string(), String::new()));
        }

        Self { base, variants, sizes }
    }

    fn variant_union(&self) -> String {
        union(&self.variants)
    }

    fn size_union(&self) -> String {
        union(&self.sizes)
    }

    fn default_size(&self) -> &str {
        if self.sizes.iter().any(|(name, _)| name == DEFAULT_SIZE) {
            DEFAULT_SIZE
        } else {
            self.sizes.first().map_or(DEFAULT_SIZE, |(name, _)| name.as_str())
        }
    }

    fn write_consts(&self, out: &mut String, indent: &str, variant_type: &str, size_type: &str) {
        let _ = writeln!(out, "{indent}const baseClasses = {};", js_string(&self.base));
        write_record(out, indent, "variantClasses", variant_type, &self.variants);
        write_record(out, indent, "sizeClasses", size_type, &self.sizes);
    }
}

fn write_record(out: &mut String, indent: &str, name: &str, key_type: &str, entries: &[(String, String)]) {
    let _ = writeln!(out, "{indent}const {name}: Record<{key_type}, string> = {{");
    for (key, classes) in entries {
        let _ = writeln!(out, "{indent}  {}: {},", js_string(key), js_string(classes));
    }
    let _ = writeln!(out, "{indent}}};");
}

fn union(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(name, _)| js_string(name))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn root_classes(spec: &ComponentSpec) -> String {
    [
        spec.base_styles.as_ref().and_then(|b| b.classes.as_deref()),
        spec.properties.as_ref().and_then(|p| p.classes.as_deref()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn parts(spec: &ComponentSpec) -> impl Iterator<Item = (&str, &str)> {
    spec.components
        .iter()
        .flatten()
        .map(|(part, sub)| (part.as_str(), sub.classes.as_deref().unwrap_or_default()))
}

/// Double-quoted, escaped string literal.
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
