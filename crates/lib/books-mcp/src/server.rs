//! MCP server runners for books-mcp.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use books_store::Catalog;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::{info, warn};

use crate::BooksMcp;

pub const DEFAULT_MCP_HTTP_PORT: u16 = 3002;
pub const DEFAULT_MCP_HTTP_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_MCP_HTTP_PORT));
pub const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
pub const DEFAULT_SSE_RETRY_SECS: u64 = 3;

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    /// Keeps MCP sessions between requests; off by default so every call is
    /// served by a fresh handler.
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    /// Reconnect delay advertised to SSE clients.
    pub sse_retry: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: false,
            sse_keep_alive: Some(Duration::from_secs(DEFAULT_SSE_KEEP_ALIVE_SECS)),
            sse_retry: Some(Duration::from_secs(DEFAULT_SSE_RETRY_SECS)),
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }

    #[must_use]
    pub const fn with_sse_keep_alive(mut self, sse_keep_alive: Option<Duration>) -> Self {
        self.sse_keep_alive = sse_keep_alive;
        self
    }

    #[must_use]
    pub const fn with_sse_retry(mut self, sse_retry: Option<Duration>) -> Self {
        self.sse_retry = sse_retry;
        self
    }
}

impl Default for McpHttpServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MCP_HTTP_ADDR)
    }
}

/// Serves the MCP server over stdio until the peer disconnects or Ctrl-C.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(catalog: Catalog) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = BooksMcp::new(catalog);
    info!(tools = ?service.tool_names(), "serving MCP over stdio");
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    tokio::select! {
        quit = running.waiting() => {
            let reason = quit?;
            info!(?reason, "stdio session closed");
        }
        () = shutdown_signal() => {}
    }
    Ok(())
}

/// Builds the HTTP router: the MCP endpoint at `/mcp` and a `/health` probe.
pub fn router(catalog: Catalog, config: &McpHttpServerConfig) -> Router {
    let service: StreamableHttpService<BooksMcp, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(BooksMcp::new(catalog.clone())),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                sse_retry: config.sse_retry,
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", service)
}

/// Serves the MCP server using streamable HTTP transport until Ctrl-C.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    catalog: Catalog,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(catalog, &config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(
        addr = %listener.local_addr()?,
        stateful = config.stateful_mode,
        "serving MCP over streamable HTTP at /mcp"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, shutting down gracefully");
}
