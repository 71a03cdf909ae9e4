//! Catalog entries

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// Books are immutable once loaded. `author` and every entry of `genres`
/// are ids into the dataset's lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, opaque id
    pub id: String,

    /// Display title
    pub title: String,

    /// Author id (key into the author table)
    pub author: String,

    /// Cover image URI
    pub image: String,

    /// Long-form description shown in the detail view
    #[serde(default)]
    pub description: String,

    /// Genre ids (keys into the genre table), never empty
    pub genres: Vec<String>,

    /// Publication timestamp
    pub published: DateTime<Utc>,
}

impl Book {
    /// Whether the book is tagged with the given genre id
    pub fn in_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }

    /// Calendar year of publication
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}
