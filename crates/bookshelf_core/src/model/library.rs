//! In-memory book collection.
//!
//! # Responsibility
//! - Hold books in insertion order.
//! - Provide title-keyed add/remove/get/contains/toggle operations.
//!
//! # Invariants
//! - `add_book` never inserts a second entry with an existing title.
//! - `remove_book` deletes every entry with a matching title.
//! - All lookups are linear scans by exact title equality.
//! - Collections built with `from_books` are taken as-is, duplicates included.

use crate::model::book::Book;

/// Ordered collection of books keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing sequence without deduplicating it.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Appends `book` unless its title is already present.
    ///
    /// Returns `true` when the book was inserted.
    pub fn add_book(&mut self, book: Book) -> bool {
        if self.is_in_library(&book) {
            return false;
        }
        self.books.push(book);
        true
    }

    /// Removes all books titled `title` and returns how many were removed.
    pub fn remove_book(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        before - self.books.len()
    }

    /// Returns the first book titled `title`.
    pub fn get_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    pub fn get_book_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.title == title)
    }

    /// Returns whether a book with the same title as `book` exists.
    pub fn is_in_library(&self, book: &Book) -> bool {
        self.contains_title(&book.title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.books.iter().any(|book| book.title == title)
    }

    /// Flips the read flag of the first book titled `title`.
    ///
    /// Returns the new flag, or `None` when no book matches.
    pub fn toggle_read(&mut self, title: &str) -> Option<bool> {
        self.get_book_mut(title).map(Book::toggle_read)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
