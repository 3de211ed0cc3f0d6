//! Tailwind-style class strings.

use serde::Serialize;

use crate::catalog::{CategoryMap, ComponentSpec, Variant};
use crate::engine::resolve::{resolve, LookupError};

use super::kebab_case;

/// A flattened class string and the fragments it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindClasses {
    /// All fragments joined with single spaces.
    pub classes: String,
    /// Non-empty fragments in order: base, variant, size, focus, disabled, properties.
    pub breakdown: Vec<String>,
}

/// Generates the class string for `component` from the catalog.
///
/// # Errors
///
/// Returns a [`LookupError`] if the component is not in the catalog.
pub fn generate_tailwind(
    components: &CategoryMap<ComponentSpec>,
    component: &str,
    variant: &str,
    size: &str,
) -> Result<TailwindClasses, LookupError> {
    let spec = resolve(components, component, "Component")?;
    Ok(component_classes(spec, variant, size))
}

/// Builds the class string for an already resolved spec.
///
/// Unknown variants and sizes contribute nothing.
#[must_use]
pub fn component_classes(spec: &ComponentSpec, variant: &str, size: &str) -> TailwindClasses {
    let fragments = [
        spec.base_styles.as_ref().and_then(|b| b.classes.clone()),
        spec.variants.get(variant).map(variant_classes),
        spec.sizes.get(size).and_then(|s| s.classes.clone()),
        spec.state_classes("focus").map(str::to_string),
        spec.state_classes("disabled").map(str::to_string),
        spec.properties.as_ref().and_then(|p| p.classes.clone()),
    ];

    let breakdown: Vec<String> = fragments
        .into_iter()
        .flatten()
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    TailwindClasses {
        classes: breakdown.join(" "),
        breakdown,
    }
}

/// Returns the precomputed classes of a variant, or synthesises them from
/// its color properties.
pub(super) fn variant_classes(variant: &Variant) -> String {
    if let Some(classes) = variant.classes.as_deref().filter(|c| !c.trim().is_empty()) {
        return classes.to_string();
    }

    let synthesised = [
        variant.background.as_deref().map(|bg| format!("bg-{}", kebab_case(bg))),
        variant.color.as_deref().map(|c| format!("text-{}", kebab_case(c))),
        variant.hover().map(|h| format!("hover:bg-{}", kebab_case(h))),
    ];

    synthesised.into_iter().flatten().collect::<Vec<_>>().join(" ")
}
