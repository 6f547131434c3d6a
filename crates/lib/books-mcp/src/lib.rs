//! MCP server implementation for books-mcp.
//!
//! This crate wires the book query control plane into rmcp tool handlers and
//! provides the stdio and streamable HTTP runners.

mod tools;
pub mod server;

use books_core::control::BooksControlPlane;
use books_store::Catalog;
use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool_handler,
};
use rmcp::model::{ServerCapabilities, ServerInfo};

pub use tools::filters::{RatingParams, YearParams};
pub use tools::genre::GenreParams;

const SERVER_INSTRUCTIONS: &str = r"Stateless Book Data Analyst: read-only queries over a fixed
catalog of ten books.

Tools:
- `get_average_rating_by_genre` with `{ genre }` returns `{ average_rating, genre }`.
  Unknown genres report 0.0.
- `get_books_by_genre` with `{ genre }` returns `{ books }`.
- `get_books_by_rating_above` with `{ rating }` returns `{ books }` rated strictly above
  the value.
- `get_books_by_year` with `{ year }` returns `{ books }` published that year.

Notes:
- Genre matching is exact and case-sensitive. Genres in the catalog: Classic Fiction,
  Dystopian Fiction, Romance, Fantasy, Science Fiction.
- Results come back as structured content matching each tool's output schema.
- Each book carries `id`, `title`, `author`, `genre`, `year`, `isbn`, `available` and `rating`.
- No query fails on unmatched input; it returns an empty list instead.";

/// MCP server wrapper around the book query control plane.
#[derive(Clone)]
pub struct BooksMcp {
    tool_router: ToolRouter<Self>,
    control: BooksControlPlane,
}

impl BooksMcp {
    /// Creates a new server answering from `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_control(BooksControlPlane::new(catalog))
    }

    /// Creates a new server around an existing control plane.
    #[must_use]
    pub fn with_control(control: BooksControlPlane) -> Self {
        let tool_router = Self::tool_router_genre() + Self::tool_router_filters();
        Self {
            tool_router,
            control,
        }
    }

    /// Names of the registered tools, sorted.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }
}

#[tool_handler]
impl ServerHandler for BooksMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_the_four_query_tools() {
        let server = BooksMcp::new(Catalog::sample());
        assert_eq!(
            server.tool_names(),
            vec![
                "get_average_rating_by_genre",
                "get_books_by_genre",
                "get_books_by_rating_above",
                "get_books_by_year",
            ]
        );
    }

    #[test]
    fn advertises_tools_capability() {
        let info = BooksMcp::new(Catalog::sample()).get_info();
        assert!(info.capabilities.tools.is_some());

        let instructions = info.instructions.expect("instructions");
        for name in BooksMcp::new(Catalog::sample()).tool_names() {
            assert!(instructions.contains(&name), "instructions should mention {name}");
        }
    }

    #[test]
    fn tool_schemas_describe_arguments() {
        let server = BooksMcp::new(Catalog::sample());
        for tool in server.tool_router.list_all() {
            let properties = tool
                .input_schema
                .get("properties")
                .and_then(serde_json::Value::as_object)
                .unwrap_or_else(|| panic!("{} should declare properties", tool.name));
            let expected = match &*tool.name {
                "get_average_rating_by_genre" | "get_books_by_genre" => "genre",
                "get_books_by_rating_above" => "rating",
                "get_books_by_year" => "year",
                other => panic!("unexpected tool {other}"),
            };
            assert!(properties.contains_key(expected), "{} missing {expected}", tool.name);
        }
    }

    #[test]
    fn tools_publish_titles_and_output_schemas() {
        let server = BooksMcp::new(Catalog::sample());
        for tool in server.tool_router.list_all() {
            let (title, result_field) = match &*tool.name {
                "get_average_rating_by_genre" => ("Get Average Rating by Genre", "average_rating"),
                "get_books_by_genre" => ("Get Books by Genre", "books"),
                "get_books_by_rating_above" => ("Get Books by Rating Above", "books"),
                "get_books_by_year" => ("Get Books by Year", "books"),
                other => panic!("unexpected tool {other}"),
            };
            assert_eq!(tool.title.as_deref(), Some(title));

            let output_schema = tool
                .output_schema
                .as_ref()
                .unwrap_or_else(|| panic!("{} should publish an output schema", tool.name));
            let properties = output_schema
                .get("properties")
                .and_then(serde_json::Value::as_object)
                .unwrap_or_else(|| panic!("{} output schema should declare properties", tool.name));
            assert!(
                properties.contains_key(result_field),
                "{} output schema missing {result_field}",
                tool.name
            );
        }
    }
}
