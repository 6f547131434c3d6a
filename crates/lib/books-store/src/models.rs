use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BookRecord {
    /// Unique book id.
    pub id: u32,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Book genre.
    pub genre: String,
    /// Publication year.
    pub year: i32,
    /// ISBN number.
    pub isbn: String,
    /// Availability status.
    pub available: bool,
    /// Book rating.
    pub rating: f64,
}

impl BookRecord {
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            isbn: isbn.into(),
            available: true,
            rating: 0.0,
        }
    }

    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}
