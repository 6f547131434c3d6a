use std::{collections::HashSet, error::Error, fmt, sync::Arc};

use crate::models::BookRecord;
use crate::schema::{
    GENRE_CLASSIC_FICTION,
    GENRE_DYSTOPIAN_FICTION,
    GENRE_FANTASY,
    GENRE_ROMANCE,
    GENRE_SCIENCE_FICTION,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidId { title: String },
    DuplicateId(u32),
    EmptyField { id: u32, field: &'static str },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { title } => write!(f, "book id must be positive: {title}"),
            Self::DuplicateId(id) => write!(f, "duplicate book id: {id}"),
            Self::EmptyField { id, field } => write!(f, "book {id} has an empty {field}"),
        }
    }
}

impl Error for CatalogError {}

/// Immutable, ordered book collection.
///
/// Cloning shares the underlying records; nothing hands out mutable access
/// once the catalog is built.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Arc<[BookRecord]>,
}

impl Catalog {
    /// Builds a catalog from caller-supplied records, keeping their order.
    ///
    /// # Errors
    /// Returns `CatalogError` if an id is zero or repeated, or if a text field
    /// is blank.
    pub fn try_new(books: impl IntoIterator<Item = BookRecord>) -> Result<Self, CatalogError> {
        let books: Vec<BookRecord> = books.into_iter().collect();
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if book.id == 0 {
                return Err(CatalogError::InvalidId {
                    title: book.title.clone(),
                });
            }
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
            check_text(book.id, "title", &book.title)?;
            check_text(book.id, "author", &book.author)?;
            check_text(book.id, "genre", &book.genre)?;
            check_text(book.id, "isbn", &book.isbn)?;
        }
        Ok(Self {
            books: books.into(),
        })
    }

    /// The ten-book collection the server answers from.
    #[must_use]
    pub fn sample() -> Self {
        let books = vec![
            BookRecord::new(
                1,
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                GENRE_CLASSIC_FICTION,
                1925,
                "978-0743273565",
            )
            .with_rating(4.5),
            BookRecord::new(
                2,
                "To Kill a Mockingbird",
                "Harper Lee",
                GENRE_CLASSIC_FICTION,
                1960,
                "978-0446310789",
            )
            .with_rating(4.8),
            BookRecord::new(
                3,
                "1984",
                "George Orwell",
                GENRE_DYSTOPIAN_FICTION,
                1949,
                "978-0451524935",
            )
            .with_available(false)
            .with_rating(4.7),
            BookRecord::new(
                4,
                "Pride and Prejudice",
                "Jane Austen",
                GENRE_ROMANCE,
                1813,
                "978-0141439518",
            )
            .with_rating(4.6),
            BookRecord::new(
                5,
                "The Catcher in the Rye",
                "J.D. Salinger",
                GENRE_CLASSIC_FICTION,
                1951,
                "978-0316769488",
            )
            .with_rating(4.2),
            BookRecord::new(
                6,
                "Brave New World",
                "Aldous Huxley",
                GENRE_DYSTOPIAN_FICTION,
                1932,
                "978-0060850524",
            )
            .with_rating(4.4),
            BookRecord::new(
                7,
                "The Hobbit",
                "J.R.R. Tolkien",
                GENRE_FANTASY,
                1937,
                "978-0547928227",
            )
            .with_available(false)
            .with_rating(4.9),
            BookRecord::new(
                8,
                "Fahrenheit 451",
                "Ray Bradbury",
                GENRE_DYSTOPIAN_FICTION,
                1953,
                "978-1451673319",
            )
            .with_rating(4.3),
            BookRecord::new(
                9,
                "Dune",
                "Frank Herbert",
                GENRE_SCIENCE_FICTION,
                1965,
                "978-0441172719",
            )
            .with_rating(4.7),
            BookRecord::new(
                10,
                "The Lord of the Rings",
                "J.R.R. Tolkien",
                GENRE_FANTASY,
                1954,
                "978-0544003415",
            )
            .with_rating(4.9),
        ];
        Self {
            books: books.into(),
        }
    }

    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_text(id: u32, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField { id, field });
    }
    Ok(())
}
