//! Error types for catalog loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Category;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading a catalog category.
///
/// Every variant is fatal: a category that cannot be loaded means the
/// packaged catalog is defective, not that a caller made a mistake.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing document could not be read.
    #[error("Failed to read {category} catalog: {path}")]
    Read {
        /// Category being loaded.
        category: Category,
        /// Path of the backing document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source has no document for this category.
    #[error("No backing document for {category} catalog")]
    Missing {
        /// Category being loaded.
        category: Category,
    },

    /// The backing document is not valid JSON for its category.
    #[error("Failed to parse {category} catalog")]
    Parse {
        /// Category being loaded.
        category: Category,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but violates a catalog invariant.
    #[error("Invalid {category} catalog: {message}")]
    Invalid {
        /// Category being loaded.
        category: Category,
        /// Description of the violated invariant.
        message: String,
    },

    /// A typed accessor was asked for a category with a different shape.
    #[error("{category} is not a generic entry catalog")]
    WrongShape {
        /// Category that was requested.
        category: Category,
    },
}
