use books_store::{BookRecord, Catalog};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod filters;
pub mod genre;

/// Books matched by a query, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BookList {
    /// Matching books.
    pub books: Vec<BookRecord>,
}

impl BookList {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|book| book.title.as_str())
    }
}

impl FromIterator<BookRecord> for BookList {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

/// Mean rating for a genre, echoing the genre that was asked for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AverageRatingReport {
    /// Average rating of books in the genre.
    pub average_rating: f64,
    /// The genre queried.
    pub genre: String,
}

#[derive(Debug, Clone, Default)]
pub struct BooksControlPlane {
    catalog: Catalog,
}

impl BooksControlPlane {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn select(&self, predicate: impl Fn(&BookRecord) -> bool) -> BookList {
        self.catalog
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }
}
