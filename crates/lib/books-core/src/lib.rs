//! Core query services for books-mcp.
//!
//! This crate exposes the control plane the MCP tools call into. Every query
//! is a read-only scan of an immutable catalog and always yields a defined
//! result.

pub mod control;
