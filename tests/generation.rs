//! Integration tests for the CSS, Tailwind, CSS variable and skeleton generators.

use design_system_mcp::catalog::CatalogStore;
use design_system_mcp::engine::generate::{
    generate_css, generate_css_variables, generate_skeleton, generate_tailwind, CssOptions, Framework,
    GenerateError,
};
use design_system_mcp::engine::resolve::LookupError;

const ALL_BLOCKS: CssOptions = CssOptions {
    include_hover: true,
    include_focus: true,
    include_dark_mode: true,
};

#[test]
fn css_is_deterministic_and_ordered() {
    let store = CatalogStore::embedded();
    let (tokens, components) = (store.tokens().unwrap(), store.components().unwrap());

    let first = generate_css(tokens, components, "button", "default", ALL_BLOCKS).unwrap();
    let second = generate_css(tokens, components, "button", "default", ALL_BLOCKS).unwrap();
    assert_eq!(first, second);

    let base = first.find(".button {").unwrap();
    let hover = first.find(".button:hover {").unwrap();
    let focus = first.find(".button:focus-visible {").unwrap();
    let dark = first.find("@media (prefers-color-scheme: dark) {").unwrap();
    assert!(base < hover && hover < focus && focus < dark, "{first}");
}

#[test]
fn css_options_drop_blocks() {
    let store = CatalogStore::embedded();
    let options = CssOptions {
        include_hover: false,
        include_focus: false,
        include_dark_mode: false,
    };
    let css = generate_css(store.tokens().unwrap(), store.components().unwrap(), "button", "default", options)
        .unwrap();
    assert!(css.starts_with(".button {\n"));
    assert!(!css.contains(":hover"));
    assert!(!css.contains(":focus-visible"));
    assert!(!css.contains("@media"));
}

#[test]
fn tailwind_classes_join_the_breakdown() {
    let store = CatalogStore::embedded();
    let components = store.components().unwrap();
    for variant in ["default", "secondary", "outline", "link"] {
        let result = generate_tailwind(components, "button", variant, "sm").unwrap();
        assert_eq!(result.classes, result.breakdown.join(" "), "{variant}");
        assert!(result.breakdown.iter().all(|fragment| !fragment.is_empty()));
        assert!(result.classes.contains("h-9 rounded-md px-3"));
    }
}

#[test]
fn css_variables_cover_tokens() {
    let store = CatalogStore::embedded();
    let tokens = store.tokens().unwrap();

    let full = generate_css_variables(tokens, true, true);
    assert!(full.starts_with(":root {\n"));
    assert!(full.contains("--color-primary: #0d2872;"));
    assert!(full.contains("--spacing-4: 1rem;"));
    assert!(full.contains("@media (prefers-color-scheme: dark) {"));
    assert!(full.contains("\n.dark {\n"));

    let light_only = generate_css_variables(tokens, true, false);
    assert!(!light_only.contains(".dark"));
    assert_eq!(light_only, generate_css_variables(tokens, true, false));
}

#[test]
fn skeletons_for_every_framework() {
    let store = CatalogStore::embedded();
    let components = store.components().unwrap();

    for framework in Framework::ALL {
        let code = generate_skeleton(components, "card", framework, "default").unwrap();
        assert!(!code.is_empty(), "{framework}");
    }

    let html = generate_skeleton(components, "card", Framework::Html, "default").unwrap();
    assert!(html.contains(r#"data-component="card""#));
    assert!(html.contains(r#"data-part="header""#));

    let vue = generate_skeleton(components, "button", Framework::Vue, "default").unwrap();
    assert!(vue.contains(r#"<script setup lang="ts">"#));
}

#[test]
fn unknown_framework_lists_supported_ones() {
    let err = "angular".parse::<Framework>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown framework 'angular'. Supported: html, react, vue, svelte"
    );
    assert!(" React ".parse::<Framework>().is_ok());
}

#[test]
fn unknown_component_is_a_lookup_error() {
    let store = CatalogStore::embedded();
    let err = generate_skeleton(store.components().unwrap(), "carousel", Framework::Html, "default").unwrap_err();
    assert!(matches!(err, GenerateError::Lookup(LookupError::NotFound { .. })));
    assert!(err.available().contains(&"dialog".to_string()));
}
