//! Book domain model.
//!
//! # Responsibility
//! - Define the four-field record tracked by the library.
//! - Own the storage field naming (`isRead`) and field defaults.
//!
//! # Invariants
//! - `title` is the de facto identity; no separate ID exists.
//! - `pages` is free text and is never parsed as a number.
//! - Fields absent from stored JSON fall back to `Book::default()` values.

use serde::{Deserialize, Serialize};

/// Placeholder used for missing title/author values.
pub const UNKNOWN_FIELD: &str = "Unknown";
/// Placeholder used for a missing page count.
pub const UNKNOWN_PAGES: &str = "0";

/// One library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Unique key within a library by exact string equality.
    pub title: String,
    pub author: String,
    /// Page count as entered, e.g. `"320"`.
    pub pages: String,
    /// Serialized as `isRead` to match the stored document shape.
    #[serde(rename = "isRead")]
    pub is_read: bool,
}

impl Book {
    /// Creates a book from all four fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: impl Into<String>,
        is_read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages: pages.into(),
            is_read,
        }
    }

    /// Flips the read flag and returns the new value.
    pub fn toggle_read(&mut self) -> bool {
        self.is_read = !self.is_read;
        self.is_read
    }

    /// Human-readable read state, `Read` or `Not read`.
    pub fn read_label(&self) -> &'static str {
        if self.is_read {
            "Read"
        } else {
            "Not read"
        }
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new(UNKNOWN_FIELD, UNKNOWN_FIELD, UNKNOWN_PAGES, false)
    }
}
