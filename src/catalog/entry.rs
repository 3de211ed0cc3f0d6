//! Generic catalog entries.
//!
//! Layout patterns, UX guidelines, effects, templates and most other
//! categories share one shape: a description, optional classification and a
//! free-form payload that is returned to the caller untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary fields shared by every searchable catalog entry.
pub trait Described {
    /// Free-text description.
    fn description(&self) -> &str;

    /// Optional classification within the category.
    fn category(&self) -> Option<&str>;

    /// Search tags.
    fn tags(&self) -> &[String];

    /// Opaque pointer to an associated file (code sample, image).
    fn file(&self) -> Option<&str>;
}

/// A named entry in a generic catalog category.
///
/// The name is the key of the owning [`CategoryMap`](super::CategoryMap).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Optional classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Search tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// File or code reference, resolved by the caller.
    #[serde(default, alias = "code", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Category-specific payload.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Described for Entry {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_unknown_fields() {
        let json = r#"{
            "description": "Sidebar with collapsible sections",
            "tags": ["navigation"],
            "slots": ["header", "content"]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.tags, vec!["navigation".to_string()]);
        assert!(entry.category.is_none());
        assert_eq!(entry.payload["slots"], serde_json::json!(["header", "content"]));
    }

    #[test]
    fn code_is_accepted_as_file_pointer() {
        let entry: Entry = serde_json::from_str(r#"{"code": "effects/glow.css"}"#).unwrap();
        assert_eq!(entry.file(), Some("effects/glow.css"));
        assert_eq!(entry.description(), "");
    }
}
