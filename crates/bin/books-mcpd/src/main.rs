//! Daemon entry point for the book data analyst MCP server.
//!
//! Loads configuration from flags and the environment, then serves the book
//! query tools over streamable HTTP, or over stdio when requested.

mod config;
mod logging;

use books_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use books_store::Catalog;
use tracing::{error, info};

use crate::config::BooksConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = BooksConfig::from_args()?;
    logging::init(config.log_level);
    info!("starting stateless book data analyst MCP server");

    let catalog = Catalog::sample();
    info!(books = catalog.len(), "catalog loaded");

    let result = if config.enable_stdio {
        serve_stdio(catalog).await
    } else {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.stateful_mode)
            .with_sse_keep_alive(config.sse_keep_alive)
            .with_sse_retry(config.sse_retry);
        serve_streamable_http(catalog, http_config).await
    };

    match &result {
        Ok(()) => info!("server exited"),
        Err(err) => error!(%err, "server stopped unexpectedly"),
    }
    result
}
