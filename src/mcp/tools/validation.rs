//! Validation and audit tools.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::validate::{audit_design, validate_colors, validate_component, validate_spacing};

use super::{parse_args, Tool, ToolContext, ToolError, ToolOutput, ToolResult};

pub(super) fn tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "validate_colors",
            "Check colors against the light and semantic palettes. Invalid colors get the \
             three nearest tokens by RGB distance (approximate, not perceptual).",
            list_schema("colors", "Colors to check (e.g. #0d2872)"),
            call_validate_colors,
        ),
        Tool::new(
            "validate_spacing",
            "Check spacing values against the spacing scale. Off-scale values get the \
             three nearest scale entries.",
            list_schema("values", "Spacing values to check (e.g. 16px, 1rem)"),
            call_validate_spacing,
        ),
        Tool::new(
            "validate_component",
            "Review a component description for raw colors, off-grid spacing and missing \
             accessibility or responsive behaviour.",
            description_schema("Component description"),
            call_validate_component,
        ),
        Tool::new(
            "audit_design",
            "Audit a design description across colors, typography, spacing, accessibility, \
             responsiveness and component coverage.",
            description_schema("Design description"),
            call_audit_design,
        ),
    ]
}

fn list_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: {
                "type": "array",
                "items": { "type": "string" },
                "description": description
            }
        },
        "required": [field]
    })
}

fn description_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "description": { "type": "string", "description": description }
        },
        "required": ["description"]
    })
}

#[derive(Debug, Deserialize)]
struct ColorsArgs {
    colors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SpacingArgs {
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DescriptionArgs {
    description: String,
}

impl DescriptionArgs {
    fn parse(arguments: Value) -> Result<Self, ToolError> {
        let args: Self = parse_args(arguments)?;
        if args.description.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "description must be a non-empty string".into(),
            ));
        }
        Ok(args)
    }
}

fn call_validate_colors(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: ColorsArgs = parse_args(arguments)?;
    ToolOutput::json(validate_colors(context.store.tokens()?, &args.colors)?)
}

fn call_validate_spacing(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: SpacingArgs = parse_args(arguments)?;
    ToolOutput::json(validate_spacing(context.store.tokens()?, &args.values)?)
}

fn call_validate_component(context: &ToolContext, arguments: Value) -> ToolResult {
    let args = DescriptionArgs::parse(arguments)?;
    ToolOutput::json(validate_component(context.store.components()?, &args.description)?)
}

fn call_audit_design(context: &ToolContext, arguments: Value) -> ToolResult {
    let args = DescriptionArgs::parse(arguments)?;
    let store = &context.store;
    ToolOutput::json(audit_design(store.tokens()?, store.components()?, &args.description)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::engine::validate::ValidationError;

    fn context() -> ToolContext {
        ToolContext::new(CatalogStore::embedded())
    }

    #[test]
    fn colors_report_shape() {
        let output = call_validate_colors(&context(), json!({ "colors": ["#0d2872", "#ff0001"] })).unwrap();
        let report = output.value();
        assert_eq!(report["results"][0]["isValid"], true);
        assert_eq!(report["results"][0]["tokenName"], "primary");
        assert_eq!(report["results"][1]["isValid"], false);
        assert_eq!(report["results"][1]["suggestions"].as_array().map(Vec::len), Some(3));
        assert_eq!(
            report["summary"],
            json!({ "total": 2, "valid": 1, "invalid": 1, "score": 50 })
        );
    }

    #[test]
    fn empty_lists_are_per_call_errors() {
        let err = call_validate_colors(&context(), json!({ "colors": [] })).unwrap_err();
        assert!(matches!(err, ToolError::Validation(ValidationError::EmptyInput { .. })));

        let err = call_validate_spacing(&context(), json!({ "values": [] })).unwrap_err();
        assert_eq!(err.to_json(), json!({ "error": "At least one spacing value is required" }));
    }

    #[test]
    fn missing_list_is_an_argument_error() {
        let err = call_validate_spacing(&context(), Value::Null).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn audit_report_shape() {
        let output = call_audit_design(&context(), json!({ "description": "A blue hero with 13px padding" })).unwrap();
        let report = output.value();
        assert_eq!(report["overallScore"], 94);
        assert_eq!(report["rating"], "Good");
        assert_eq!(report["categories"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = call_validate_component(&context(), json!({ "description": " " })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
