use tracing::debug;

use super::{AverageRatingReport, BookList, BooksControlPlane};

impl BooksControlPlane {
    /// Lists books whose genre matches exactly (case-sensitive).
    #[must_use]
    pub fn books_by_genre(&self, genre: &str) -> BookList {
        let books = self.select(|book| book.genre == genre);
        debug!(genre, matched = books.len(), "books by genre");
        books
    }

    /// Averages the rating of every book in `genre`.
    ///
    /// A genre with no books reports `0.0` rather than failing.
    #[must_use]
    pub fn average_rating_by_genre(&self, genre: &str) -> AverageRatingReport {
        let ratings: Vec<f64> = self
            .catalog
            .iter()
            .filter(|book| book.genre == genre)
            .map(|book| book.rating)
            .collect();
        let average_rating = mean(&ratings);
        debug!(
            genre,
            matched = ratings.len(),
            average_rating,
            "average rating by genre"
        );
        AverageRatingReport {
            average_rating,
            genre: genre.to_string(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
