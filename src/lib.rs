//! design-system-mcp: MCP server for a UI design-system catalog
//!
//! The server answers read-only questions about a design system (tokens,
//! component specs, layout and UX guidance, charts, page templates) and
//! derives code from it. All content is reference data loaded once per
//! process; nothing is written back.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog documents, sources and the lazy store
//! - [`engine`] - Resolution, search, generation and validation
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Startup error types
//! - [`mcp`] - MCP protocol implementation and tool registry

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod mcp;
