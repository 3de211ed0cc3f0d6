//! Component specifications.
//!
//! A component spec describes a UI widget through its base styles,
//! variants, sizes and interaction states. Compound widgets (cards, dialogs)
//! carry a nested `components` map of sub-parts instead.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entry::Described;

/// Specification of a single component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Optional classification (form, navigation, feedback, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Search tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Structural styles shared by every variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_styles: Option<BaseStyles>,

    /// Visual variants keyed by name. `default` is expected for leaf components.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, Variant>,

    /// Size metrics keyed by name. `default` is expected for leaf components.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sizes: IndexMap<String, Size>,

    /// Interaction states (focus, disabled, ...).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub states: IndexMap<String, State>,

    /// Sub-parts of a compound component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, SubPart>>,

    /// Extra top-level properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// File or code reference, resolved by the caller.
    #[serde(default, alias = "code", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Anything else the catalog carries (accessibility notes, usage, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentSpec {
    /// Returns `true` if this is a compound component with sub-parts.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.components.as_ref().is_some_and(|parts| !parts.is_empty())
    }

    /// Checks the leaf/compound shape of the spec.
    ///
    /// A compound spec carries no variants or sizes. A leaf spec declares
    /// both a `default` variant and a `default` size.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first rule the spec breaks.
    pub fn validate(&self) -> Result<(), String> {
        if self.is_compound() {
            if !self.variants.is_empty() || !self.sizes.is_empty() {
                return Err("has sub-parts as well as variants or sizes".to_string());
            }
            return Ok(());
        }
        if !self.variants.contains_key("default") {
            return Err("has no 'default' variant".to_string());
        }
        if !self.sizes.contains_key("default") {
            return Err("has no 'default' size".to_string());
        }
        Ok(())
    }

    /// Returns the classes of a named state, if declared and non-empty.
    #[must_use]
    pub fn state_classes(&self, state: &str) -> Option<&str> {
        self.states
            .get(state)
            .and_then(|s| s.classes.as_deref())
            .filter(|c| !c.is_empty())
    }
}

impl Described for ComponentSpec {
    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// Structural styles of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStyles {
    /// CSS `display` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// CSS `align-items` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,

    /// CSS `justify-content` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,

    /// Font weight, either numeric (`600`) or a keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Value>,

    /// Precomputed utility classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other structural properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A visual variant.
///
/// Color properties hold either a palette key (`primary`) or a literal CSS
/// color (`#0d2872`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Foreground color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Border marker: `true`, a palette key, or a literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Value>,

    /// Hover background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,

    /// Precomputed utility classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other variant properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variant {
    /// Returns `true` if the variant asks for a border.
    #[must_use]
    pub fn has_border(&self) -> bool {
        match &self.border {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty() && s != "none",
            Some(_) => true,
        }
    }

    /// Returns the hover property if set and non-empty.
    #[must_use]
    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref().filter(|h| !h.is_empty())
    }
}

/// Size metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// CSS height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// CSS padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    /// Precomputed utility classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other size properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An interaction state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Precomputed utility classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other state properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A sub-part of a compound component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPart {
    /// Free-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Utility classes of the sub-part wrapper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other sub-part properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extra top-level component properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Utility classes appended after every other fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Other properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
