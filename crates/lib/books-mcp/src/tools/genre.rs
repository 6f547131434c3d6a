use books_core::control::{AverageRatingReport, BookList};
use rmcp::{
    handler::server::wrapper::{Json, Parameters},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::BooksMcp;

/// Parameters for genre-scoped queries.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenreParams {
    /// Genre to filter books by. Matching is exact and case-sensitive.
    pub genre: String,
}

#[tool_router(router = tool_router_genre, vis = "pub")]
impl BooksMcp {
    #[tool(
        title = "Get Average Rating by Genre",
        description = "Get the average rating of books in a specific genre"
    )]
    async fn get_average_rating_by_genre(
        &self,
        Parameters(params): Parameters<GenreParams>,
    ) -> Json<AverageRatingReport> {
        Json(self.control.average_rating_by_genre(&params.genre))
    }

    #[tool(
        title = "Get Books by Genre",
        description = "Get all books from a specific genre"
    )]
    async fn get_books_by_genre(
        &self,
        Parameters(params): Parameters<GenreParams>,
    ) -> Json<BookList> {
        Json(self.control.books_by_genre(&params.genre))
    }
}

#[cfg(test)]
mod tests {
    use books_store::Catalog;

    use super::*;

    fn genre(name: &str) -> Parameters<GenreParams> {
        Parameters(GenreParams {
            genre: name.to_string(),
        })
    }

    #[tokio::test]
    async fn average_rating_for_unknown_genre_is_zero() {
        let server = BooksMcp::new(Catalog::sample());
        let Json(report) = server.get_average_rating_by_genre(genre("Horror")).await;

        assert_eq!(
            report,
            AverageRatingReport {
                average_rating: 0.0,
                genre: "Horror".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn average_rating_for_fantasy() {
        let server = BooksMcp::new(Catalog::sample());
        let Json(report) = server.get_average_rating_by_genre(genre("Fantasy")).await;

        assert_eq!(report.genre, "Fantasy");
        assert!((report.average_rating - 4.9).abs() < 1e-12);
    }

    #[tokio::test]
    async fn books_by_genre_returns_full_records() {
        let server = BooksMcp::new(Catalog::sample());
        let Json(list) = server.get_books_by_genre(genre("Fantasy")).await;

        assert_eq!(list.len(), 2);
        let hobbit = &list.books[0];
        assert_eq!(hobbit.title, "The Hobbit");
        assert_eq!(hobbit.author, "J.R.R. Tolkien");
        assert!(!hobbit.available);
        assert_eq!(list.books[1].title, "The Lord of the Rings");
        assert_eq!(list.books[1].id, 10);
    }

    #[tokio::test]
    async fn books_by_unknown_genre_is_empty() {
        let server = BooksMcp::new(Catalog::sample());
        let Json(list) = server.get_books_by_genre(genre("Poetry")).await;

        assert!(list.is_empty());
    }
}
