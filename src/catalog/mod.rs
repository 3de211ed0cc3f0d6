//! Design-system catalog store.
//!
//! The catalog is read-only reference data split into categories, each
//! backed by one JSON document. [`CatalogStore`] parses a category on first
//! access and hands out shared references to the cached structure from then
//! on. Nothing in the crate mutates a loaded category.
//!
//! # Categories
//!
//! | Category        | Shape                               |
//! |-----------------|-------------------------------------|
//! | `tokens`        | [`DesignTokens`]                    |
//! | `components`    | [`CategoryMap`] of [`ComponentSpec`] |
//! | `charts`        | [`ChartCatalog`]                    |
//! | everything else | [`CategoryMap`] of [`Entry`]        |

mod component;
mod entry;
mod error;
mod screenshots;
mod source;
mod tokens;

pub use component::{BaseStyles, ComponentSpec, Properties, Size, State, SubPart, Variant};
pub use entry::{Described, Entry};
pub use error::{CatalogError, CatalogResult};
pub use screenshots::{mime_type, DirectoryScreenshots, NoScreenshots, ScreenshotSource};
pub use source::{CatalogSource, DirectorySource, EmbeddedSource, MemorySource};
pub use tokens::{
    format_px, length_to_px, Animation, ColorToken, ColorTokens, DesignTokens, FontSize, Palette,
    Spacing, Typography, REM_BASE_PX, TOKEN_SECTIONS,
};

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered mapping from entry name to entry.
pub type CategoryMap<T> = IndexMap<String, T>;

/// A logical catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Design tokens.
    Tokens,
    /// Component specifications.
    Components,
    /// Layout patterns.
    Layouts,
    /// UX guidelines by topic.
    UxGuidelines,
    /// Accessibility rules by topic.
    Accessibility,
    /// Dashboard component specifications.
    Dashboard,
    /// Chart specifications.
    Charts,
    /// Landing-page component specifications.
    Landing,
    /// Visual effect descriptors.
    Effects,
    /// Page templates.
    Templates,
    /// Screenshot metadata.
    Screenshots,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Self; 11] = [
        Self::Tokens,
        Self::Components,
        Self::Layouts,
        Self::UxGuidelines,
        Self::Accessibility,
        Self::Dashboard,
        Self::Charts,
        Self::Landing,
        Self::Effects,
        Self::Templates,
        Self::Screenshots,
    ];

    /// Returns the canonical category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::Components => "components",
            Self::Layouts => "layouts",
            Self::UxGuidelines => "ux-guidelines",
            Self::Accessibility => "accessibility",
            Self::Dashboard => "dashboard",
            Self::Charts => "charts",
            Self::Landing => "landing",
            Self::Effects => "effects",
            Self::Templates => "templates",
            Self::Screenshots => "screenshots",
        }
    }

    /// Returns the file name of the backing document.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// Parses a category name.
    ///
    /// Accepts the canonical name, case-insensitively, with `_` in place of `-`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalised = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|c| c.name() == normalised)
    }

    /// Returns `true` for categories stored as maps of generic [`Entry`] values.
    #[must_use]
    pub const fn is_entry_catalog(self) -> bool {
        !matches!(self, Self::Tokens | Self::Components | Self::Charts)
    }

    /// Returns the canonical names of every category.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chart specifications plus the pieces shared between charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCatalog {
    /// Chart specs keyed by chart name.
    pub charts: CategoryMap<Entry>,
    /// Components reused across charts (tooltip, legend, ...).
    #[serde(default)]
    pub shared_components: CategoryMap<Entry>,
    /// Props common to every chart.
    #[serde(default)]
    pub common_props: Value,
}

/// Lazily populated, append-only cache of catalog categories.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    tokens: OnceLock<DesignTokens>,
    components: OnceLock<CategoryMap<ComponentSpec>>,
    charts: OnceLock<ChartCatalog>,
    entries: HashMap<Category, OnceLock<CategoryMap<Entry>>>,
}

impl CatalogStore {
    /// Creates a store over `source`. Nothing is read until first access.
    #[must_use]
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        let entries = Category::ALL
            .into_iter()
            .filter(|c| c.is_entry_catalog())
            .map(|c| (c, OnceLock::new()))
            .collect();

        Self {
            source: Box::new(source),
            tokens: OnceLock::new(),
            components: OnceLock::new(),
            charts: OnceLock::new(),
            entries,
        }
    }

    /// Creates a store over the built-in catalog.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Describes the backing source for logging.
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Loads every category.
    ///
    /// # Errors
    ///
    /// Returns the first category that fails to load.
    pub fn preload(&self) -> CatalogResult<()> {
        for category in Category::ALL {
            match category {
                Category::Tokens => {
                    self.tokens()?;
                }
                Category::Components => {
                    self.components()?;
                }
                Category::Charts => {
                    self.charts()?;
                }
                _ => {
                    self.entries(category)?;
                }
            }
        }
        Ok(())
    }

    /// Returns the design tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens document is missing, malformed, or has
    /// an empty scale.
    pub fn tokens(&self) -> CatalogResult<&DesignTokens> {
        self.load(&self.tokens, Category::Tokens, DesignTokens::validate)
    }

    /// Returns the component specifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the components document is missing or malformed,
    /// or if a component breaks the leaf/compound shape rules of
    /// [`ComponentSpec::validate`].
    pub fn components(&self) -> CatalogResult<&CategoryMap<ComponentSpec>> {
        self.load(&self.components, Category::Components, check_components)
    }

    /// Returns the chart catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the charts document is missing or malformed.
    pub fn charts(&self) -> CatalogResult<&ChartCatalog> {
        self.load(&self.charts, Category::Charts, |_| Ok(()))
    }

    /// Returns a generic entry category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::WrongShape`] for `tokens`, `components` and
    /// `charts`, or an error if the document is missing or malformed.
    pub fn entries(&self, category: Category) -> CatalogResult<&CategoryMap<Entry>> {
        let cell = self
            .entries
            .get(&category)
            .ok_or(CatalogError::WrongShape { category })?;
        self.load(cell, category, |_| Ok(()))
    }

    /// Returns the cached value of `cell`, parsing it on first use.
    ///
    /// Concurrent first loads may both parse; the first to store wins and
    /// every caller receives the stored value.
    fn load<'a, T, F>(
        &self,
        cell: &'a OnceLock<T>,
        category: Category,
        check: F,
    ) -> CatalogResult<&'a T>
    where
        T: DeserializeOwned,
        F: FnOnce(&T) -> Result<(), String>,
    {
        if let Some(cached) = cell.get() {
            return Ok(cached);
        }

        let json = self.source.read(category)?;
        let parsed: T =
            serde_json::from_str(&json).map_err(|source| CatalogError::Parse { category, source })?;
        check(&parsed).map_err(|message| CatalogError::Invalid { category, message })?;

        tracing::debug!(%category, source = %self.source.describe(), "Loaded catalog category");

        Ok(cell.get_or_init(|| parsed))
    }
}

fn check_components(components: &CategoryMap<ComponentSpec>) -> Result<(), String> {
    components.iter().try_for_each(|(name, spec)| {
        spec.validate()
            .map_err(|e| format!("component '{name}' {e}"))
    })
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .field("tokens_loaded", &self.tokens.get().is_some())
            .field("components_loaded", &self.components.get().is_some())
            .field("charts_loaded", &self.charts.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Categories serialise as their canonical name.
impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown category '{name}'. Valid categories: {}",
                Self::names().join(", ")
            ))
        })
    }
}
