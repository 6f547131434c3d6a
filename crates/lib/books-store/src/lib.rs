//! Book record model and catalog for books-mcp.
//!
//! This crate defines the record type shared by the query layer and the MCP
//! surface, along with the fixed sample collection the server answers from.

pub mod catalog;
pub mod models;
pub mod schema;

pub use catalog::{Catalog, CatalogError};
pub use models::*;
