//! Query, generation and validation over the catalog.
//!
//! Engines borrow from a [`CatalogStore`](crate::catalog::CatalogStore) for
//! the duration of one call and never mutate it.
//!
//! - [`resolve`] - exact-match lookup with a uniform not-found contract
//! - [`search`] - listings and free-text search
//! - [`generate`] - CSS, Tailwind, CSS variable and skeleton generators
//! - [`validate`] - token conformance checks and description heuristics

pub mod generate;
pub mod resolve;
pub mod search;
pub mod validate;
