use books_core::control::BookList;
use rmcp::{
    handler::server::wrapper::{Json, Parameters},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::BooksMcp;

/// Parameters for the rating threshold query.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RatingParams {
    /// Minimum rating to filter books by. Books rated exactly at this value are excluded.
    pub rating: f64,
}

/// Parameters for the publication year query.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct YearParams {
    /// Year to filter books by.
    pub year: i32,
}

#[tool_router(router = tool_router_filters, vis = "pub")]
impl BooksMcp {
    #[tool(
        title = "Get Books by Rating Above",
        description = "Get all books with rating above a specified value"
    )]
    async fn get_books_by_rating_above(
        &self,
        Parameters(params): Parameters<RatingParams>,
    ) -> Json<BookList> {
        Json(self.control.books_by_rating_above(params.rating))
    }

    #[tool(
        title = "Get Books by Year",
        description = "Get all books released in a specific year"
    )]
    async fn get_books_by_year(
        &self,
        Parameters(params): Parameters<YearParams>,
    ) -> Json<BookList> {
        Json(self.control.books_by_year(params.year))
    }
}

#[cfg(test)]
mod tests {
    use books_store::Catalog;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn rating_above_is_strict() {
        let server = BooksMcp::new(Catalog::sample());

        let Json(list) = server
            .get_books_by_rating_above(Parameters(RatingParams { rating: 4.8 }))
            .await;
        assert_eq!(
            list.titles().collect::<Vec<_>>(),
            vec!["The Hobbit", "The Lord of the Rings"]
        );

        let Json(list) = server
            .get_books_by_rating_above(Parameters(RatingParams { rating: 4.9 }))
            .await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn books_by_year() {
        let server = BooksMcp::new(Catalog::sample());

        let Json(list) = server
            .get_books_by_year(Parameters(YearParams { year: 1949 }))
            .await;
        assert_eq!(list.titles().collect::<Vec<_>>(), vec!["1984"]);
        assert_eq!(list.books[0].isbn, "978-0451524935");

        let Json(list) = server
            .get_books_by_year(Parameters(YearParams { year: 2000 }))
            .await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn repeated_calls_return_identical_payloads() {
        let server = BooksMcp::new(Catalog::sample());
        let Json(first) = server
            .get_books_by_year(Parameters(YearParams { year: 1954 }))
            .await;
        let Json(second) = server
            .get_books_by_year(Parameters(YearParams { year: 1954 }))
            .await;
        assert_eq!(first, second);
    }

    #[test]
    fn params_deserialize_from_flat_arguments() {
        let rating: RatingParams =
            serde_json::from_value(json!({ "rating": 4.5 })).expect("rating params");
        assert!((rating.rating - 4.5).abs() < f64::EPSILON);

        let year: YearParams =
            serde_json::from_value(json!({ "year": 1813 })).expect("year params");
        assert_eq!(year.year, 1813);

        assert!(serde_json::from_value::<YearParams>(json!({ "year": "1813" })).is_err());
    }
}
