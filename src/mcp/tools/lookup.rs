//! Catalog lookup, listing and search tools.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{mime_type, Category, CategoryMap, Described, Entry};
use crate::engine::resolve::resolve;
use crate::engine::search::{list_all, search, summarize};

use super::{parse_args, Tool, ToolContext, ToolError, ToolOutput, ToolResult};

pub(super) fn tools() -> Vec<Tool> {
    vec![
        Tool::new(
            "get_design_tokens",
            "Get the design tokens: colors, typography, spacing, border radius, shadows, \
             animation, z-index, breakpoints and containers. Pass a category to get one section.",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Optional token section (colors, typography, spacing, borderRadius, shadows, animation, zIndex, breakpoints, containers)"
                    }
                }
            }),
            get_design_tokens,
        ),
        Tool::new(
            "get_component_spec",
            "Get the full specification of a UI component: base styles, variants, sizes, \
             states and sub-parts.",
            name_schema("component", "Component name (e.g. button, card, dialog)"),
            get_component_spec,
        ),
        Tool::new(
            "get_layout_pattern",
            "Get a layout pattern such as a dashboard shell or a marketing page layout.",
            name_schema("pattern", "Layout pattern name"),
            get_layout_pattern,
        ),
        Tool::new(
            "get_ux_guidelines",
            "Get UX guidelines for a topic.",
            name_schema("topic", "Guideline topic"),
            get_ux_guidelines,
        ),
        Tool::new(
            "get_accessibility_rules",
            "Get accessibility rules for a topic such as color contrast or keyboard navigation.",
            name_schema("topic", "Accessibility topic"),
            get_accessibility_rules,
        ),
        Tool::new(
            "list_patterns",
            "List the entries of every catalog category, or of one category.",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": Category::names(),
                        "description": "Optional category to list"
                    }
                }
            }),
            list_patterns,
        ),
        Tool::new(
            "search_patterns",
            "Search names, descriptions, categories and tags across the whole catalog \
             (case-insensitive substring match).",
            name_schema("query", "Search text"),
            search_patterns,
        ),
        Tool::new(
            "get_full_design_system",
            "Get the complete design system catalog in one document.",
            empty_schema(),
            get_full_design_system,
        ),
        Tool::new(
            "get_dashboard_component",
            "Get a dashboard component specification (stat cards, data tables, sidebars, ...).",
            name_schema("component", "Dashboard component name"),
            get_dashboard_component,
        ),
        Tool::new(
            "list_dashboard_components",
            "List every dashboard component.",
            empty_schema(),
            list_dashboard_components,
        ),
        Tool::new(
            "get_chart_spec",
            "Get a chart specification.",
            name_schema("chart", "Chart name (e.g. line, bar, area)"),
            get_chart_spec,
        ),
        Tool::new("list_charts", "List every chart specification.", empty_schema(), list_charts),
        Tool::new(
            "get_chart_shared_components",
            "Get the components shared by all charts (tooltip, legend, axis, grid), or one of them.",
            json!({
                "type": "object",
                "properties": {
                    "component": {
                        "type": "string",
                        "description": "Optional shared component name"
                    }
                }
            }),
            get_chart_shared_components,
        ),
        Tool::new(
            "get_chart_common_props",
            "Get the props common to every chart.",
            empty_schema(),
            get_chart_common_props,
        ),
        Tool::new(
            "get_landing_component",
            "Get a landing page component specification (hero, pricing, testimonials, ...).",
            name_schema("component", "Landing component name"),
            get_landing_component,
        ),
        Tool::new(
            "list_landing_components",
            "List every landing page component.",
            empty_schema(),
            list_landing_components,
        ),
        Tool::new(
            "get_effect",
            "Get a visual effect descriptor (glassmorphism, gradients, shimmer, ...).",
            name_schema("effect", "Effect name"),
            get_effect,
        ),
        Tool::new("list_effects", "List every visual effect.", empty_schema(), list_effects),
        Tool::new(
            "get_page_template",
            "Get a page template with its sections and the components it uses.",
            name_schema("template", "Template name"),
            get_page_template,
        ),
        Tool::new(
            "list_page_templates",
            "List every page template.",
            empty_schema(),
            list_page_templates,
        ),
        Tool::new(
            "get_screenshot",
            "Get a reference screenshot as a base64 image together with its metadata.",
            name_schema("name", "Screenshot name"),
            get_screenshot,
        ),
        Tool::new(
            "list_screenshots",
            "List every reference screenshot.",
            empty_schema(),
            list_screenshots,
        ),
    ]
}

fn name_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: {
                "type": "string",
                "description": description
            }
        },
        "required": [field]
    })
}

fn empty_schema() -> Value {
    json!({ "type": "object", "properties": {} })
}

#[derive(Debug, Deserialize)]
struct OptionalCategory {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComponentArgs {
    component: String,
}

#[derive(Debug, Deserialize)]
struct OptionalComponent {
    #[serde(default)]
    component: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PatternArgs {
    pattern: String,
}

#[derive(Debug, Deserialize)]
struct TopicArgs {
    topic: String,
}

#[derive(Debug, Deserialize)]
struct QueryArgs {
    query: String,
}

#[derive(Debug, Deserialize)]
struct ChartArgs {
    chart: String,
}

#[derive(Debug, Deserialize)]
struct EffectArgs {
    effect: String,
}

#[derive(Debug, Deserialize)]
struct TemplateArgs {
    template: String,
}

#[derive(Debug, Deserialize)]
struct NameArgs {
    name: String,
}

fn get_design_tokens(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: OptionalCategory = parse_args(arguments)?;
    let tokens = context.store.tokens()?;
    match args.category {
        None => ToolOutput::json(tokens),
        Some(category) => {
            let sections = tokens.sections()?;
            let section = resolve(&sections, &category, "Token category")?;
            Ok(ToolOutput::Json(json!({ category: section })))
        }
    }
}

fn get_component_spec(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: ComponentArgs = parse_args(arguments)?;
    let spec = resolve(context.store.components()?, &args.component, "Component")?;
    ToolOutput::json(spec)
}

/// Looks up `key` in an entry category.
fn entry(context: &ToolContext, category: Category, key: &str, kind: &'static str) -> ToolResult {
    let entries = context.store.entries(category)?;
    ToolOutput::json(resolve(entries, key, kind)?)
}

/// Lists an entry category as `{ "<category>": [...], "count": n }`.
fn listing<T: Described>(name: &str, map: &CategoryMap<T>) -> ToolResult {
    let summaries = summarize(map);
    Ok(ToolOutput::Json(json!({
        name: summaries,
        "count": summaries.len(),
    })))
}

fn get_layout_pattern(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: PatternArgs = parse_args(arguments)?;
    entry(context, Category::Layouts, &args.pattern, "Layout pattern")
}

fn get_ux_guidelines(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: TopicArgs = parse_args(arguments)?;
    entry(context, Category::UxGuidelines, &args.topic, "UX topic")
}

fn get_accessibility_rules(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: TopicArgs = parse_args(arguments)?;
    entry(context, Category::Accessibility, &args.topic, "Accessibility topic")
}

fn list_patterns(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: OptionalCategory = parse_args(arguments)?;

    let categories = match args.category {
        None => Category::ALL.to_vec(),
        Some(name) => {
            let category = Category::from_name(&name).ok_or_else(|| ToolError::UnknownCategory {
                category: name.clone(),
                available: Category::names().into_iter().map(str::to_string).collect(),
            })?;
            vec![category]
        }
    };

    let mut listing = IndexMap::new();
    for category in categories {
        listing.insert(category.name(), list_all(&context.store, category)?);
    }
    ToolOutput::json(listing)
}

fn search_patterns(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: QueryArgs = parse_args(arguments)?;
    let query = args.query.trim();
    if query.is_empty() {
        return Err(ToolError::InvalidArguments("query must be a non-empty string".into()));
    }

    let results = search(&context.store, query)?;
    Ok(ToolOutput::Json(json!({
        "query": query,
        "count": results.len(),
        "results": results,
    })))
}

fn get_full_design_system(context: &ToolContext, _arguments: Value) -> ToolResult {
    let store = &context.store;
    let mut catalog = IndexMap::new();
    for category in Category::ALL {
        let value = match category {
            Category::Tokens => serde_json::to_value(store.tokens()?)?,
            Category::Components => serde_json::to_value(store.components()?)?,
            Category::Charts => serde_json::to_value(store.charts()?)?,
            _ => serde_json::to_value(store.entries(category)?)?,
        };
        catalog.insert(category.name(), value);
    }
    ToolOutput::json(catalog)
}

fn get_dashboard_component(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: ComponentArgs = parse_args(arguments)?;
    entry(context, Category::Dashboard, &args.component, "Dashboard component")
}

fn list_dashboard_components(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("components", context.store.entries(Category::Dashboard)?)
}

fn get_chart_spec(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: ChartArgs = parse_args(arguments)?;
    let charts = context.store.charts()?;
    ToolOutput::json(resolve(&charts.charts, &args.chart, "Chart")?)
}

fn list_charts(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("charts", &context.store.charts()?.charts)
}

fn get_chart_shared_components(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: OptionalComponent = parse_args(arguments)?;
    let shared: &CategoryMap<Entry> = &context.store.charts()?.shared_components;
    match args.component {
        None => ToolOutput::json(shared),
        Some(component) => ToolOutput::json(resolve(shared, &component, "Chart component")?),
    }
}

fn get_chart_common_props(context: &ToolContext, _arguments: Value) -> ToolResult {
    Ok(ToolOutput::Json(context.store.charts()?.common_props.clone()))
}

fn get_landing_component(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: ComponentArgs = parse_args(arguments)?;
    entry(context, Category::Landing, &args.component, "Landing component")
}

fn list_landing_components(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("components", context.store.entries(Category::Landing)?)
}

fn get_effect(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: EffectArgs = parse_args(arguments)?;
    entry(context, Category::Effects, &args.effect, "Effect")
}

fn list_effects(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("effects", context.store.entries(Category::Effects)?)
}

fn get_page_template(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: TemplateArgs = parse_args(arguments)?;
    entry(context, Category::Templates, &args.template, "Page template")
}

fn list_page_templates(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("templates", context.store.entries(Category::Templates)?)
}

fn get_screenshot(context: &ToolContext, arguments: Value) -> ToolResult {
    let args: NameArgs = parse_args(arguments)?;
    let screenshots = context.store.entries(Category::Screenshots)?;
    let screenshot = resolve(screenshots, &args.name, "Screenshot")?;

    let file = screenshot
        .file
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| ToolError::MissingScreenshotFile {
            name: args.name.clone(),
        })?;

    let bytes = context
        .screenshots
        .read(file)
        .map_err(|source| ToolError::Screenshot {
            name: args.name.clone(),
            source,
        })?;
    let mime_type = mime_type(file);

    tracing::debug!(name = %args.name, file, bytes = bytes.len(), "Serving screenshot");

    Ok(ToolOutput::Image {
        json: json!({
            "name": args.name,
            "description": screenshot.description,
            "file": file,
            "mimeType": mime_type,
            "size": bytes.len(),
        }),
        data: BASE64_STANDARD.encode(&bytes),
        mime_type,
    })
}

fn list_screenshots(context: &ToolContext, _arguments: Value) -> ToolResult {
    listing("screenshots", context.store.entries(Category::Screenshots)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, DirectoryScreenshots};

    fn context() -> ToolContext {
        ToolContext::new(CatalogStore::embedded())
    }

    fn call(handler: super::super::Handler, arguments: Value) -> ToolResult {
        handler(&context(), arguments)
    }

    #[test]
    fn token_section_lookup() {
        let output = call(get_design_tokens, json!({ "category": "spacing" })).unwrap();
        assert_eq!(output.value()["spacing"]["scale"]["4"], "1rem");

        let err = call(get_design_tokens, json!({ "category": "sounds" })).unwrap_err();
        assert!(err.available().contains(&"colors".to_string()));
    }

    #[test]
    fn component_lookup_error_lists_components() {
        let err = call(get_component_spec, json!({ "component": "carousel" })).unwrap_err();
        let payload = err.to_json();
        assert_eq!(payload["available"][0], "button");
        assert!(payload["error"].as_str().unwrap().starts_with("Component 'carousel' not found"));
    }

    #[test]
    fn list_patterns_with_unknown_category() {
        let err = call(list_patterns, json!({ "category": "widgets" })).unwrap_err();
        assert!(matches!(err, ToolError::UnknownCategory { .. }));
        assert_eq!(err.available().len(), Category::ALL.len());
    }

    #[test]
    fn list_patterns_covers_every_category() {
        let output = call(list_patterns, Value::Null).unwrap();
        let listing = output.value().as_object().unwrap();
        assert_eq!(listing.len(), Category::ALL.len());
        assert!(listing["effects"].as_array().is_some_and(|a| !a.is_empty()));
    }

    #[test]
    fn blank_query_is_rejected() {
        let err = call(search_patterns, json!({ "query": "   " })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn full_design_system_has_every_category() {
        let output = call(get_full_design_system, Value::Null).unwrap();
        for category in Category::ALL {
            assert!(output.value().get(category.name()).is_some(), "missing {category}");
        }
    }

    #[test]
    fn screenshot_without_directory_is_a_per_call_error() {
        let err = call(get_screenshot, json!({ "name": "login" })).unwrap_err();
        assert!(matches!(err, ToolError::Screenshot { .. }));
    }

    #[test]
    fn screenshot_is_served_as_base64() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::embedded();
        let file = store.entries(Category::Screenshots).unwrap()["login"]
            .file
            .clone()
            .unwrap();
        let path = dir.path().join(&file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"png").unwrap();

        let context = ToolContext::new(store).with_screenshots(DirectoryScreenshots::new(dir.path()));
        let output = get_screenshot(&context, json!({ "name": "login" })).unwrap();
        let ToolOutput::Image { json, data, .. } = output else {
            panic!("expected image output");
        };
        assert_eq!(data, "cG5n");
        assert_eq!(json["size"], 3);
    }
}
