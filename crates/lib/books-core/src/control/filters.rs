use tracing::debug;

use super::{BookList, BooksControlPlane};

impl BooksControlPlane {
    /// Lists books rated strictly above `rating`.
    #[must_use]
    pub fn books_by_rating_above(&self, rating: f64) -> BookList {
        let books = self.select(|book| book.rating > rating);
        debug!(rating, matched = books.len(), "books by rating above");
        books
    }

    /// Lists books published in `year`.
    #[must_use]
    pub fn books_by_year(&self, year: i32) -> BookList {
        let books = self.select(|book| book.year == year);
        debug!(year, matched = books.len(), "books by year");
        books
    }
}
