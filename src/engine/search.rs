//! Listing and free-text search over the catalog.

use serde::Serialize;

use crate::catalog::{CatalogResult, CatalogStore, Category, CategoryMap, Described, TOKEN_SECTIONS};

/// Compact projection of a catalog entry for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Entry name.
    pub name: String,
    /// Entry description.
    pub description: String,
    /// Optional classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Search tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Catalog the hit came from.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Entry name.
    pub name: String,
    /// Entry description.
    pub description: String,
    /// File pointer of the entry, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Result kind used for chart shared components.
pub const CHART_SHARED_KIND: &str = "chart-components";

/// Projects every entry of `map` in insertion order.
#[must_use]
pub fn summarize<T: Described>(map: &CategoryMap<T>) -> Vec<Summary> {
    map.iter()
        .map(|(name, entry)| Summary {
            name: name.clone(),
            description: entry.description().to_string(),
            category: entry.category().map(str::to_string),
            tags: entry.tags().to_vec(),
        })
        .collect()
}

/// Lists every entry of a category.
///
/// For `tokens` the token sections are listed.
///
/// # Errors
///
/// Returns an error if the category fails to load.
pub fn list_all(store: &CatalogStore, category: Category) -> CatalogResult<Vec<Summary>> {
    match category {
        Category::Tokens => {
            let tokens = store.tokens()?;
            let sizes = [
                tokens.colors.light.len()
                    + tokens.colors.dark.len()
                    + tokens.colors.semantic.len()
                    + tokens.colors.chart.len(),
                tokens.typography.font_family.len()
                    + tokens.typography.font_size.len()
                    + tokens.typography.font_weight.len(),
                tokens.spacing.scale.len(),
                tokens.border_radius.len(),
                tokens.shadows.len(),
                tokens.animation.duration.len() + tokens.animation.easing.len(),
                tokens.z_index.len(),
                tokens.breakpoints.len(),
                tokens.containers.len(),
            ];
            Ok(TOKEN_SECTIONS
                .iter()
                .zip(sizes)
                .map(|(name, count)| Summary {
                    name: (*name).to_string(),
                    description: format!("{count} {name} tokens"),
                    category: None,
                    tags: Vec::new(),
                })
                .collect())
        }
        Category::Components => Ok(summarize(store.components()?)),
        Category::Charts => Ok(summarize(&store.charts()?.charts)),
        _ => Ok(summarize(store.entries(category)?)),
    }
}

/// Searches names, descriptions, categories and tags of every entry in
/// every category, case-insensitively.
///
/// Results are grouped by catalog in [`Category::ALL`] order; each entry
/// appears at most once.
///
/// # Errors
///
/// Returns an error if a category fails to load.
pub fn search(store: &CatalogStore, query: &str) -> CatalogResult<Vec<SearchResult>> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for category in Category::ALL {
        match category {
            Category::Tokens => {}
            Category::Components => {
                collect(&mut results, category.name(), store.components()?, &needle);
            }
            Category::Charts => {
                let charts = store.charts()?;
                collect(&mut results, category.name(), &charts.charts, &needle);
                collect(&mut results, CHART_SHARED_KIND, &charts.shared_components, &needle);
            }
            _ => collect(&mut results, category.name(), store.entries(category)?, &needle),
        }
    }

    Ok(results)
}

fn collect<T: Described>(
    results: &mut Vec<SearchResult>,
    kind: &'static str,
    map: &CategoryMap<T>,
    needle: &str,
) {
    results.extend(
        map.iter()
            .filter(|(name, entry)| matches(name, *entry, needle))
            .map(|(name, entry)| SearchResult {
                kind,
                name: name.clone(),
                description: entry.description().to_string(),
                file: entry.file().map(str::to_string),
            }),
    );
}

/// Returns `true` if `needle` (already lower-cased) occurs in any searchable field.
fn matches<T: Described>(name: &str, entry: &T, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(name)
        || contains(entry.description())
        || entry.category().is_some_and(contains)
        || entry.tags().iter().any(|tag| contains(tag))
}
