//! Code generation tools.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::generate::{
    generate_css, generate_css_variables, generate_skeleton, generate_tailwind, CssOptions, Framework,
    DEFAULT_SIZE, DEFAULT_VARIANT,
};

use super::{parse_args, Tool, ToolContext, ToolOutput, ToolResult};

pub(super) fn tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "generate_css",
            "Generate CSS for a component variant from its spec and the design tokens. \
             Includes hover and focus blocks by default; dark mode is opt-in.",
            json!({
                "type": "object",
                "properties": {
                    "component": { "type": "string", "description": "Component name" },
                    "variant": { "type": "string", "description": "Variant name (default: default)" },
                    "includeHover": { "type": "boolean", "description": "Emit a :hover block" },
                    "includeFocus": { "type": "boolean", "description": "Emit a :focus-visible block" },
                    "includeDarkMode": { "type": "boolean", "description": "Emit a dark-mode media block" }
                },
                "required": ["component"]
            }),
            call_generate_css,
        ),
        Tool::new(
            "generate_tailwind_classes",
            "Generate the Tailwind class string for a component variant and size.",
            json!({
                "type": "object",
                "properties": {
                    "component": { "type": "string", "description": "Component name" },
                    "variant": { "type": "string", "description": "Variant name (default: default)" },
                    "size": { "type": "string", "description": "Size name (default: default)" }
                },
                "required": ["component"]
            }),
            call_generate_tailwind,
        ),
        Tool::new(
            "generate_css_variables",
            "Generate CSS custom properties for the whole token set, with optional \
             dark-mode overrides under both prefers-color-scheme and a .dark class.",
            json!({
                "type": "object",
                "properties": {
                    "includeLight": { "type": "boolean", "description": "Include light color variables (default: true)" },
                    "includeDark": { "type": "boolean", "description": "Include dark color overrides (default: true)" }
                }
            }),
            call_generate_css_variables,
        ),
        Tool::new(
            "generate_component_skeleton",
            "Generate skeleton markup for a component in html, react, vue or svelte.",
            json!({
                "type": "object",
                "properties": {
                    "component": { "type": "string", "description": "Component name" },
                    "framework": {
                        "type": "string",
                        "enum": ["html", "react", "vue", "svelte"],
                        "description": "Target framework"
                    },
                    "variant": { "type": "string", "description": "Variant used for default classes" }
                },
                "required": ["component"]
            }),
            call_generate_skeleton,
        ),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CssArgs {
    component: String,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    include_hover: Option<bool>,
    #[serde(default)]
    include_focus: Option<bool>,
    #[serde(default)]
    include_dark_mode: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct TailwindArgs {
    component: String,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariablesArgs {
    #[serde(default)]
    include_light: Option<bool>,
    #[serde(default)]
    include_dark: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SkeletonArgs {
    component: String,
    #[serde(default)]
    framework: Option<String>,
    #[serde(default)]
    variant: Option<String>,
}

fn call_generate_css(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: CssArgs = parse_args(arguments)?;
    let defaults = context.defaults.css;
    let options = CssOptions {
        include_hover: args.include_hover.unwrap_or(defaults.include_hover),
        include_focus: args.include_focus.unwrap_or(defaults.include_focus),
        include_dark_mode: args.include_dark_mode.unwrap_or(defaults.include_dark_mode),
    };
    let variant = args.variant.as_deref().unwrap_or(DEFAULT_VARIANT);

    let css = generate_css(
        context.store.tokens()?,
        context.store.components()?,
        &args.component,
        variant,
        options,
    )?;

    Ok(ToolOutput::Json(json!({
        "component": args.component,
        "variant": variant,
        "css": css,
    })))
}

fn call_generate_tailwind(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: TailwindArgs = parse_args(arguments)?;
    let variant = args.variant.as_deref().unwrap_or(DEFAULT_VARIANT);
    let size = args.size.as_deref().unwrap_or(DEFAULT_SIZE);

    let classes = generate_tailwind(context.store.components()?, &args.component, variant, size)?;

    Ok(ToolOutput::Json(json!({
        "component": args.component,
        "variant": variant,
        "size": size,
        "classes": classes.classes,
        "breakdown": classes.breakdown,
    })))
}

fn call_generate_css_variables(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: VariablesArgs = parse_args(arguments)?;
    let css = generate_css_variables(
        context.store.tokens()?,
        args.include_light.unwrap_or(true),
        args.include_dark.unwrap_or(true),
    );
    Ok(ToolOutput::Json(json!({ "css": css })))
}

fn call_generate_skeleton(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: SkeletonArgs = parse_args(arguments)?;
    let framework = match args.framework.as_deref() {
        Some(name) => name.parse::<Framework>()?,
        None => context.defaults.framework,
    };
    let variant = args.variant.as_deref().unwrap_or(DEFAULT_VARIANT);

    let code = generate_skeleton(context.store.components()?, &args.component, framework, variant)?;

    Ok(ToolOutput::Json(json!({
        "component": args.component,
        "framework": framework,
        "variant": variant,
        "code": code,
    })))
}
