//! Backing documents for catalog categories.
//!
//! A [`CatalogSource`] hands the store the raw JSON of one category. The
//! store owns parsing and caching; sources only fetch bytes.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use super::error::{CatalogError, CatalogResult};
use super::Category;

/// Supplies the raw JSON document of a category.
pub trait CatalogSource: Send + Sync {
    /// Returns the JSON document backing `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing or unreadable.
    fn read(&self, category: Category) -> CatalogResult<Cow<'static, str>>;

    /// Human-readable description for logging.
    fn describe(&self) -> String;
}

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn read(&self, category: Category) -> CatalogResult<Cow<'static, str>> {
        let json = match category {
            Category::Tokens => include_str!("../../data/tokens.json"),
            Category::Components => include_str!("../../data/components.json"),
            Category::Layouts => include_str!("../../data/layouts.json"),
            Category::UxGuidelines => include_str!("../../data/ux-guidelines.json"),
            Category::Accessibility => include_str!("../../data/accessibility.json"),
            Category::Dashboard => include_str!("../../data/dashboard.json"),
            Category::Charts => include_str!("../../data/charts.json"),
            Category::Landing => include_str!("../../data/landing.json"),
            Category::Effects => include_str!("../../data/effects.json"),
            Category::Templates => include_str!("../../data/templates.json"),
            Category::Screenshots => include_str!("../../data/screenshots.json"),
        };
        Ok(Cow::Borrowed(json))
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

/// A catalog directory holding one `<category>.json` file per category.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source reading from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for DirectorySource {
    fn read(&self, category: Category) -> CatalogResult<Cow<'static, str>> {
        let path = self.root.join(category.file_name());
        std::fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|source| CatalogError::Read {
                category,
                path,
                source,
            })
    }

    fn describe(&self) -> String {
        format!("catalog directory {}", self.root.display())
    }
}

/// Documents held in memory, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Category, String>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the document of a category.
    #[must_use]
    pub fn with(mut self, category: Category, json: impl Into<String>) -> Self {
        self.documents.insert(category, json.into());
        self
    }

    /// Starts from the built-in catalog, so tests can override one category.
    #[must_use]
    pub fn from_embedded() -> Self {
        let documents = Category::ALL
            .iter()
            .filter_map(|&category| {
                EmbeddedSource
                    .read(category)
                    .ok()
                    .map(|json| (category, json.into_owned()))
            })
            .collect();
        Self { documents }
    }
}

impl CatalogSource for MemorySource {
    fn read(&self, category: Category) -> CatalogResult<Cow<'static, str>> {
        self.documents
            .get(&category)
            .map(|json| Cow::Owned(json.clone()))
            .ok_or(CatalogError::Missing { category })
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} documents)", self.documents.len())
    }
}
