pub const GENRE_CLASSIC_FICTION: &str = "Classic Fiction";
pub const GENRE_DYSTOPIAN_FICTION: &str = "Dystopian Fiction";
pub const GENRE_ROMANCE: &str = "Romance";
pub const GENRE_FANTASY: &str = "Fantasy";
pub const GENRE_SCIENCE_FICTION: &str = "Science Fiction";

/// Genres present in the sample catalog, in first-seen order.
pub const SAMPLE_GENRES: [&str; 5] = [
    GENRE_CLASSIC_FICTION,
    GENRE_DYSTOPIAN_FICTION,
    GENRE_ROMANCE,
    GENRE_FANTASY,
    GENRE_SCIENCE_FICTION,
];
