//! Tool registry.
//!
//! Every MCP tool is a [`Tool`]: a definition for `tools/list` plus a handler
//! that parses its own typed arguments and calls into the engines. Handlers
//! return a [`ToolOutput`] on success and a [`ToolError`] for per-call
//! failures; the server turns both into a `ToolCallResult`.
//!
//! - [`lookup`] - catalog lookups, listings and search
//! - [`generation`] - CSS, Tailwind, CSS variable and skeleton generators
//! - [`validation`] - token validation and design audits

mod generation;
mod lookup;
mod validation;

use std::io;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogStore, NoScreenshots, ScreenshotSource};
use crate::engine::generate::{CssOptions, Framework, GenerateError};
use crate::engine::resolve::LookupError;
use crate::engine::validate::ValidationError;
use crate::mcp::protocol::{ToolCallResult, ToolDefinition};

/// Per-call tool failure.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A lookup key missed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Validation input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A catalog category failed to load.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The arguments did not match the tool's contract.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A category filter named no category.
    #[error("Unknown category '{category}'. Available: {}", .available.join(", "))]
    UnknownCategory {
        /// The filter as given.
        category: String,
        /// Every category name.
        available: Vec<String>,
    },

    /// A screenshot entry carries no file pointer.
    #[error("Screenshot '{name}' has no image file")]
    MissingScreenshotFile {
        /// Screenshot name.
        name: String,
    },

    /// Screenshot bytes could not be read.
    #[error("Failed to read screenshot '{name}': {source}")]
    Screenshot {
        /// Screenshot name.
        name: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A result could not be converted to JSON.
    #[error("Failed to serialise result: {0}")]
    Serialise(#[from] serde_json::Error),
}

impl ToolError {
    /// Valid alternatives for the failed request, if any.
    #[must_use]
    pub fn available(&self) -> Vec<String> {
        match self {
            Self::Lookup(e) => e.available().to_vec(),
            Self::Generate(e) => e.available(),
            Self::UnknownCategory { available, .. } => available.clone(),
            _ => Vec::new(),
        }
    }

    /// The `{"error": ..., "available": [...]}` payload sent to the caller.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("error".into(), Value::String(self.to_string()));
        let available = self.available();
        if !available.is_empty() {
            body.insert("available".into(), json!(available));
        }
        Value::Object(body)
    }
}

/// Successful tool output.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// A JSON document.
    Json(Value),
    /// A JSON document followed by an image.
    Image {
        /// Metadata document.
        json: Value,
        /// Base64 image bytes.
        data: String,
        /// MIME type of the image.
        mime_type: &'static str,
    },
}

impl ToolOutput {
    /// Serialises any value into a JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Serialise`] if the value cannot be represented as JSON.
    pub fn json(value: impl serde::Serialize) -> Result<Self, ToolError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// The JSON part of the output.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Json(json) | Self::Image { json, .. } => json,
        }
    }
}

/// Result type of tool handlers.
pub type ToolResult = Result<ToolOutput, ToolError>;

/// Generation defaults applied when a call leaves an option out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationDefaults {
    /// Default CSS block switches.
    pub css: CssOptions,
    /// Default skeleton framework.
    pub framework: Framework,
}

/// Everything a handler may read.
pub struct ToolContext {
    /// The design-system catalog.
    pub store: CatalogStore,
    /// Screenshot byte source.
    pub screenshots: Box<dyn ScreenshotSource>,
    /// Generation defaults.
    pub defaults: GenerationDefaults,
}

impl ToolContext {
    /// Creates a context over `store` without screenshots and with built-in defaults.
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            screenshots: Box::new(NoScreenshots),
            defaults: GenerationDefaults::default(),
        }
    }

    /// Replaces the screenshot source.
    #[must_use]
    pub fn with_screenshots(mut self, screenshots: impl ScreenshotSource + 'static) -> Self {
        self.screenshots = Box::new(screenshots);
        self
    }

    /// Replaces the generation defaults.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: GenerationDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Signature shared by all tool handlers.
pub type Handler = fn(&ToolContext, Value) -> ToolResult;

/// A registered tool.
pub struct Tool {
    /// Definition advertised in `tools/list`.
    pub definition: ToolDefinition,
    handler: Handler,
}

impl Tool {
    fn new(name: &'static str, description: &'static str, input_schema: Value, handler: Handler) -> Self {
        Self {
            definition: ToolDefinition {
                name,
                description,
                input_schema,
            },
            handler,
        }
    }
}

/// Lookup table from tool name to tool, in registration order.
pub struct ToolRegistry {
    tools: IndexMap<&'static str, Tool>,
}

impl ToolRegistry {
    /// Creates a registry holding every tool.
    #[must_use]
    pub fn new() -> Self {
        let tools = lookup::tools()
            .into_iter()
            .chain(generation::tools())
            .chain(validation::tools())
            .map(|tool| (tool.definition.name, tool))
            .collect();
        Self { tools }
    }

    /// Definitions of every tool, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().map(|tool| &tool.definition)
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Whether a tool with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Runs the named tool.
    ///
    /// Returns `None` if no tool has this name.
    pub fn call(&self, context: &ToolContext, name: &str, arguments: Value) -> Option<ToolResult> {
        let tool = self.tools.get(name)?;
        tracing::debug!(tool = name, "Calling tool");
        let result = (tool.handler)(context, arguments);
        if let Err(e) = &result {
            tracing::debug!(tool = name, error = %e, "Tool call failed");
        }
        Some(result)
    }

    /// Runs the named tool and converts the outcome into a `tools/call` result.
    ///
    /// # Errors
    ///
    /// Returns a serialisation error if the output cannot be rendered as text.
    pub fn call_to_result(
        &self,
        context: &ToolContext,
        name: &str,
        arguments: Value,
    ) -> serde_json::Result<ToolCallResult> {
        match self.call(context, name, arguments) {
            None => Ok(ToolCallResult::error(format!("Unknown tool: {name}"))),
            Some(Ok(ToolOutput::Json(json))) => Ok(ToolCallResult::text(serde_json::to_string_pretty(&json)?)),
            Some(Ok(ToolOutput::Image { json, data, mime_type })) => {
                Ok(ToolCallResult::text(serde_json::to_string_pretty(&json)?).with_image(data, mime_type))
            }
            Some(Err(e)) => Ok(ToolCallResult::error(serde_json::to_string_pretty(&e.to_json())?)),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses tool arguments into their typed contract. `null` counts as `{}`.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Args {
        name: String,
        #[serde(default)]
        limit: Option<u32>,
    }

    fn context() -> ToolContext {
        ToolContext::new(CatalogStore::embedded())
    }

    #[test]
    fn tool_names_are_unique_and_schemas_are_objects() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), registry.definitions().count());
        assert_eq!(registry.len(), 30);
        for definition in registry.definitions() {
            assert!(!definition.description.is_empty(), "{}", definition.name);
            assert_eq!(definition.input_schema["type"], "object", "{}", definition.name);
        }
    }

    #[test]
    fn unknown_tool_is_none() {
        let registry = ToolRegistry::new();
        assert!(registry.call(&context(), "make_coffee", Value::Null).is_none());

        let result = registry.call_to_result(&context(), "make_coffee", Value::Null).unwrap();
        assert!(result.is_error);
        assert_eq!(
            result.content,
            [crate::mcp::protocol::ToolContent::Text {
                text: "Unknown tool: make_coffee".into()
            }]
        );
    }

    #[test]
    fn parse_args_accepts_null_as_empty_object() {
        #[derive(Debug, Deserialize)]
        struct Optional {
            #[serde(default)]
            category: Option<String>,
        }
        let args: Optional = parse_args(Value::Null).unwrap();
        assert!(args.category.is_none());
    }

    #[test]
    fn parse_args_reports_contract_violations() {
        let err = parse_args::<Args>(json!({ "limit": 3 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("name")));

        let args: Args = parse_args(json!({ "name": "glow", "limit": 3 })).unwrap();
        assert_eq!(args.name, "glow");
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn error_payload_lists_alternatives() {
        let err = ToolError::from(LookupError::NotFound {
            kind: "Effect",
            key: "neon".into(),
            available: vec!["glow".into(), "grain".into()],
        });
        assert_eq!(
            err.to_json(),
            json!({
                "error": "Effect 'neon' not found. Available: glow, grain",
                "available": ["glow", "grain"],
            })
        );

        let err = ToolError::InvalidArguments("missing field `query`".into());
        assert_eq!(err.to_json(), json!({ "error": "Invalid arguments: missing field `query`" }));
    }
}
