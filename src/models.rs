use sea_orm::Set;
use serde::Deserialize;

use crate::entities::movie;

/// Genres offered when adding or filtering. The store accepts any text.
pub const GENRES: [&str; 12] = [
    "Romcom", "Comedy", "Romance", "Drama", "SciFi", "Profound", "Horror", "Thriller", "Fantasy",
    "Action", "Animated", "Musical",
];

/// Streaming services reported by platform lookups; anything else is dropped.
pub const KNOWN_PLATFORMS: [&str; 6] =
    ["Netflix", "Disney Plus", "Max", "Amazon Prime Video", "Hulu", "Apple TV"];

/// Returned as the sole platform when the metadata API has no match for a title
/// or no listing for the configured region.
pub const NOT_AVAILABLE: &str = "Not Available";

pub const DESCRIPTION_FALLBACK: &str = "Description not available.";

/// A stored catalog entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub duration: i32,
    pub description: String,
    pub watched: bool,
}

impl MovieRecord {
    /// A freshly added entry: reserved fields take their defaults.
    pub fn new(title: &str, genre: &str, platform: String) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
            platform,
            duration: 0,
            description: String::new(),
            watched: false,
        }
    }

    pub fn into_active_model(self) -> movie::ActiveModel {
        movie::ActiveModel {
            id: Default::default(),
            title: Set(self.title),
            genre: Set(self.genre),
            platform: Set(self.platform),
            duration: Set(self.duration),
            description: Set(self.description),
            watched: Set(self.watched),
        }
    }
}

/// Row shape returned by `CatalogStore::list_all`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovieSummary {
    pub title: String,
    pub genre: String,
    pub platform: String,
}

impl From<(String, String, String)> for MovieSummary {
    fn from((title, genre, platform): (String, String, String)) -> Self {
        Self { title, genre, platform }
    }
}

/// Row shape returned by `CatalogStore::filter_by_genre`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenreEntry {
    pub title: String,
    pub genre: String,
}

impl From<(String, String)> for GenreEntry {
    fn from((title, genre): (String, String)) -> Self {
        Self { title, genre }
    }
}

/// Poster and synopsis resolved on demand for the detail view. Never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovieInfo {
    pub poster_url: Option<String>,
    pub description: String,
}

impl MovieInfo {
    pub fn unavailable() -> Self {
        Self { poster_url: None, description: DESCRIPTION_FALLBACK.to_string() }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMovieRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    #[serde(default)]
    pub title: String,
}
