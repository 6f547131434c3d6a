//! MCP tool modules.
//!
//! Genre tools scope by an exact genre name; filter tools select by rating
//! threshold or publication year.

pub mod filters;
pub mod genre;
