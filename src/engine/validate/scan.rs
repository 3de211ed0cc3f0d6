//! Keyword scanning shared by component validation and the design audit.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{CategoryMap, ComponentSpec, DesignTokens};

use super::ValidationError;

/// Raw color names that bypass the token system.
pub(super) const HUE_WORDS: &[&str] = &[
    "red", "orange", "yellow", "green", "blue", "purple", "pink", "teal", "cyan", "indigo",
    "violet", "gray", "grey", "brown",
];

/// Color roles from the token system.
pub(super) const SEMANTIC_WORDS: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "muted",
    "destructive",
    "success",
    "warning",
    "error",
    "info",
    "foreground",
    "background",
];

/// Generic UI building blocks that usually have a component spec.
pub(super) const UI_NOUNS: &[&str] = &[
    "button", "input", "card", "table", "tabs", "dialog", "modal", "badge", "alert", "dropdown",
    "tooltip", "toast", "checkbox", "select", "slider", "accordion", "avatar", "carousel", "menu",
    "sidebar",
];

/// Words that signal accessibility was considered.
pub(super) const ACCESSIBILITY_WORDS: &[&str] = &[
    "focus",
    "keyboard",
    "aria",
    "accessible",
    "accessibility",
    "a11y",
    "contrast",
    "screen reader",
];

/// Words that signal keyboard or focus handling.
pub(super) const FOCUS_WORDS: &[&str] = &["focus", "keyboard", "tab order"];

/// Words that signal color contrast was considered.
pub(super) const CONTRAST_WORDS: &[&str] = &["contrast", "wcag"];

/// Words that signal the description covers text content.
pub(super) const TEXT_WORDS: &[&str] = &[
    "text", "label", "heading", "title", "copy", "paragraph", "caption", "font", "typography",
];

/// Words that signal responsive behaviour was considered.
pub(super) const RESPONSIVE_WORDS: &[&str] = &[
    "responsive",
    "mobile",
    "tablet",
    "breakpoint",
    "breakpoints",
    "adaptive",
    "small screens",
];

/// Well-known font families checked against the token font stacks.
pub(super) const FONT_NAMES: &[&str] = &[
    "arial",
    "helvetica",
    "times new roman",
    "georgia",
    "verdana",
    "roboto",
    "open sans",
    "lato",
    "montserrat",
    "poppins",
    "inter",
    "jetbrains mono",
    "comic sans",
    "courier",
    "fira code",
];

struct Patterns {
    px: Regex,
    color_literal: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            px: Regex::new(r"(?i)\b(\d+(?:\.\d+)?)px\b")?,
            color_literal: Regex::new(r"(?i)#[0-9a-f]{3,8}\b|\brgba?\(|\bhsla?\(")?,
        })
    }
}

static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();

fn patterns() -> Result<&'static Patterns, ValidationError> {
    PATTERNS
        .get_or_init(Patterns::compile)
        .as_ref()
        .map_err(|e| ValidationError::Pattern(e.clone()))
}

/// A description split into lower-case words for keyword checks.
pub(super) struct Scan<'a> {
    text: &'a str,
    words: Vec<String>,
}

impl<'a> Scan<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            words: words(text),
        }
    }

    /// Whether `keyword` (one or more words) occurs as whole words.
    pub(super) fn has(&self, keyword: &str) -> bool {
        let phrase = words(keyword);
        !phrase.is_empty() && self.words.windows(phrase.len()).any(|w| w == phrase.as_slice())
    }

    /// Whether a noun occurs in singular or plural form.
    pub(super) fn has_noun(&self, noun: &str) -> bool {
        self.has(noun) || self.has(&format!("{noun}s"))
    }

    pub(super) fn has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.has(k))
    }

    /// Keywords from `keywords` that occur, in list order.
    pub(super) fn found(&self, keywords: &[&'static str]) -> Vec<&'static str> {
        keywords.iter().copied().filter(|k| self.has(k)).collect()
    }

    /// UI nouns that occur, in list order.
    pub(super) fn nouns(&self) -> Vec<&'static str> {
        UI_NOUNS.iter().copied().filter(|n| self.has_noun(n)).collect()
    }

    /// Hue words mentioned without any semantic color role.
    pub(super) fn raw_hues(&self) -> Vec<&'static str> {
        if self.has_any(SEMANTIC_WORDS) {
            Vec::new()
        } else {
            self.found(HUE_WORDS)
        }
    }

    /// Every `Npx` magnitude, in order of appearance.
    pub(super) fn px_values(&self) -> Result<Vec<f64>, ValidationError> {
        Ok(patterns()?
            .px
            .captures_iter(self.text)
            .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
            .collect())
    }

    /// Hex, `rgb(` and `hsl(` literals, in order of appearance.
    pub(super) fn color_literals(&self) -> Result<Vec<String>, ValidationError> {
        Ok(patterns()?
            .color_literal
            .find_iter(self.text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    /// Known font names that are not part of any token font stack.
    pub(super) fn foreign_fonts(&self, tokens: &DesignTokens) -> Vec<&'static str> {
        let families: Vec<String> = tokens
            .typography
            .font_family
            .values()
            .flat_map(|stack| stack.split(','))
            .map(|family| words(family).join(" "))
            .collect();

        FONT_NAMES
            .iter()
            .copied()
            .filter(|font| self.has(font) && !families.iter().any(|f| f == font))
            .collect()
    }
}

/// Whether a pixel magnitude sits on the 4px grid.
pub(super) fn on_grid(px: f64) -> bool {
    px % 4.0 == 0.0
}

/// Nearest non-zero multiple of 4.
pub(super) fn nearest_grid(px: f64) -> f64 {
    ((px / 4.0).round() * 4.0).max(4.0)
}

/// Component specs that cover a UI noun by name or tag.
pub(super) fn matching_components(components: &CategoryMap<ComponentSpec>, noun: &str) -> Vec<String> {
    components
        .iter()
        .filter(|(name, spec)| name.as_str() == noun || spec.tags.iter().any(|t| t == noun))
        .map(|(name, _)| name.clone())
        .collect()
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
