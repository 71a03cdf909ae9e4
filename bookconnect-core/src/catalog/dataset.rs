//! Dataset loading and integrity checks
//!
//! A dataset is the books list plus the author and genre tables, supplied
//! once at start-up. It can come from a YAML or JSON file, or from the
//! sample catalog compiled into the crate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::{AuthorTable, Book, GenreTable};
use crate::{CatalogError, Result};

const BUNDLED_DATASET: &str = include_str!("../../data/books.yaml");

/// On-disk encoding of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Yaml,
    Json,
}

impl DatasetFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DatasetFormat::Json,
            _ => DatasetFormat::Yaml,
        }
    }
}

/// The full, immutable catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub authors: AuthorTable,
    pub genres: GenreTable,
}

impl Dataset {
    /// Parse a dataset from YAML and validate it
    pub fn from_yaml(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_yaml_ng::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a dataset from JSON and validate it
    pub fn from_json(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse content in the given format
    pub fn parse(content: &str, format: DatasetFormat) -> Result<Self> {
        match format {
            DatasetFormat::Yaml => Self::from_yaml(content),
            DatasetFormat::Json => Self::from_json(content),
        }
    }

    /// Load a dataset file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let format = DatasetFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Parsing dataset file");

        let dataset = Self::parse(&content, format)?;
        info!(
            path = %path.display(),
            books = dataset.books.len(),
            authors = dataset.authors.len(),
            genres = dataset.genres.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// The sample catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_DATASET)
    }

    /// Check the data-model invariants
    ///
    /// - book ids are unique
    /// - every book has at least one genre
    /// - every author and genre reference resolves
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.books.len());

        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::Integrity(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }

            if !self.authors.contains(&book.author) {
                return Err(CatalogError::Integrity(format!(
                    "book '{}' references unknown author '{}'",
                    book.id, book.author
                )));
            }

            if book.genres.is_empty() {
                return Err(CatalogError::Integrity(format!(
                    "book '{}' has no genres",
                    book.id
                )));
            }

            if let Some(genre) = book.genres.iter().find(|g| !self.genres.contains(g)) {
                return Err(CatalogError::Integrity(format!(
                    "book '{}' references unknown genre '{}'",
                    book.id, genre
                )));
            }
        }

        Ok(())
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
