//! Uniform lookup over catalog categories.
//!
//! Every lookup tool goes through [`resolve`], so the miss contract is the
//! same for components, charts, effects, token sections and the rest: an
//! exact, case-sensitive match or a [`LookupError`] listing every valid key.

use thiserror::Error;

use crate::catalog::CategoryMap;

/// A failed catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup key was empty.
    #[error("{kind} name must be a non-empty string")]
    EmptyKey {
        /// What was being looked up ("Component", "Chart", ...).
        kind: &'static str,
    },

    /// No entry with this key exists.
    #[error("{kind} '{key}' not found. Available: {}", .available.join(", "))]
    NotFound {
        /// What was being looked up.
        kind: &'static str,
        /// The key that missed.
        key: String,
        /// Every key of the category at lookup time.
        available: Vec<String>,
    },
}

impl LookupError {
    /// Returns the valid alternatives, if this is a miss.
    #[must_use]
    pub fn available(&self) -> &[String] {
        match self {
            Self::EmptyKey { .. } => &[],
            Self::NotFound { available, .. } => available,
        }
    }
}

/// Returns the keys of a category map in insertion order.
#[must_use]
pub fn available_keys<T>(map: &CategoryMap<T>) -> Vec<String> {
    map.keys().cloned().collect()
}

/// Looks up `key` in `map`.
///
/// # Errors
///
/// Returns [`LookupError::EmptyKey`] for a blank key and
/// [`LookupError::NotFound`] when no entry matches exactly.
pub fn resolve<'a, T>(
    map: &'a CategoryMap<T>,
    key: &str,
    kind: &'static str,
) -> Result<&'a T, LookupError> {
    if key.trim().is_empty() {
        return Err(LookupError::EmptyKey { kind });
    }

    map.get(key).ok_or_else(|| LookupError::NotFound {
        kind,
        key: key.to_string(),
        available: available_keys(map),
    })
}
