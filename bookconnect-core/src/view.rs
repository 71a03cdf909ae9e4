//! Plain-data view models for rendering layers
//!
//! The catalog never renders anything itself. A UI builds one
//! [`PreviewCard`] per visible book and a [`BookDetail`] for the selected
//! one, then draws them however it likes.

use serde::Serialize;

use crate::catalog::{AuthorTable, Book};

/// Shown when a book's author id has no entry in the author table
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A grid card, keyed by book id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

impl PreviewCard {
    pub fn from_book(book: &Book, authors: &AuthorTable) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: author_name(book, authors).to_string(),
            image: book.image.clone(),
        }
    }
}

/// Build cards for a slice of books
pub fn preview_cards(books: &[&Book], authors: &AuthorTable) -> Vec<PreviewCard> {
    books
        .iter()
        .map(|book| PreviewCard::from_book(book, authors))
        .collect()
}

/// Content of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    pub fn from_book(book: &Book, authors: &AuthorTable) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author_name(book, authors), book.published_year()),
            description: book.description.clone(),
        }
    }
}

fn author_name<'a>(book: &Book, authors: &'a AuthorTable) -> &'a str {
    authors.name(&book.author).unwrap_or(UNKNOWN_AUTHOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn frankenstein() -> Book {
        Book {
            id: "b1".into(),
            title: "Frankenstein".into(),
            author: "shelley".into(),
            image: "https://covers.example.org/frankenstein.jpg".into(),
            description: "A scientist gives life to a creature.".into(),
            genres: vec!["horror".into()],
            published: Utc.with_ymd_and_hms(1818, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_detail_subtitle_has_author_and_year() {
        let authors: AuthorTable = [("shelley", "Mary Shelley")].into_iter().collect();
        let detail = BookDetail::from_book(&frankenstein(), &authors);
        assert_eq!(detail.subtitle, "Mary Shelley (1818)");
        assert_eq!(detail.image, "https://covers.example.org/frankenstein.jpg");
    }

    #[test]
    fn test_card_with_unknown_author() {
        let card = PreviewCard::from_book(&frankenstein(), &AuthorTable::new());
        assert_eq!(card.author_name, UNKNOWN_AUTHOR);
        assert_eq!(card.id, "b1");
    }
}
