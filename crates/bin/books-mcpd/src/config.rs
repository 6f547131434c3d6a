use books_mcp::server::{
    DEFAULT_MCP_HTTP_PORT,
    DEFAULT_SSE_KEEP_ALIVE_SECS,
    DEFAULT_SSE_RETRY_SECS,
};
use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tracing::Level;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_LOG_LEVEL: &str = "debug";

#[derive(Parser, Debug)]
#[command(name = "books-mcpd", version, about = "Stateless book data analyst MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "BOOKS_MCP_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, env = "BOOKS_MCP_PORT", default_value_t = DEFAULT_MCP_HTTP_PORT)]
    port: u16,

    #[arg(long, env = "BOOKS_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[arg(
        long = "stdio",
        env = "BOOKS_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "stateful",
        env = "BOOKS_MCP_STATEFUL",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    stateful_mode: bool,

    #[arg(
        long,
        env = "BOOKS_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(
        long,
        env = "BOOKS_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct BooksConfig {
    pub mcp_http_addr: SocketAddr,
    pub log_level: Level,
    pub enable_stdio: bool,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl BooksConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for BooksConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let host = args.host.trim();
        if host.is_empty() {
            return Err(ConfigError::MissingSetting("BOOKS_MCP_HOST"));
        }
        let ip = parse_host(host).ok_or_else(|| ConfigError::InvalidSetting {
            name: "BOOKS_MCP_HOST",
            value: args.host.clone(),
        })?;

        let level_name = args.log_level.trim();
        let log_level: Level = level_name.parse().map_err(|_| ConfigError::InvalidSetting {
            name: "BOOKS_LOG_LEVEL",
            value: args.log_level.clone(),
        })?;

        Ok(Self {
            mcp_http_addr: SocketAddr::new(ip, args.port),
            log_level,
            enable_stdio: args.enable_stdio,
            stateful_mode: args.stateful_mode,
            sse_keep_alive: secs_or_disabled(args.sse_keep_alive_secs),
            sse_retry: secs_or_disabled(args.sse_retry_secs),
        })
    }
}

const fn secs_or_disabled(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

fn parse_host(host: &str) -> Option<IpAddr> {
    if host.eq_ignore_ascii_case("localhost") {
        return Some(IpAddr::from([127, 0, 0, 1]));
    }
    host.parse().ok()
}
