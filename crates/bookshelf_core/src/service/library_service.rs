//! Library use-case service.
//!
//! # Responsibility
//! - Restore the collection from storage on open.
//! - Apply add/remove/toggle use-cases and persist after each change.
//!
//! # Invariants
//! - Every successful mutation is followed by exactly one `save_local`.
//! - Rejected mutations (duplicate, not found) do not touch storage.
//! - A failed save leaves the in-memory collection unchanged.
//! - The service layer remains storage-agnostic.

use crate::model::book::Book;
use crate::model::library::Library;
use crate::repo::library_store::{LibraryStore, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown when adding a title that already exists.
pub const DUPLICATE_BOOK_MESSAGE: &str = "This book already exists in your library";

/// Service error for library use-cases.
#[derive(Debug)]
pub enum LibraryServiceError {
    /// A book with this title is already in the library.
    DuplicateTitle(String),
    /// No book with this title exists.
    BookNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for LibraryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTitle(_) => f.write_str(DUPLICATE_BOOK_MESSAGE),
            Self::BookNotFound(title) => write!(f, "book not found: \"{title}\""),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LibraryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for LibraryServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Library facade over a storage implementation.
pub struct LibraryService<S: LibraryStore> {
    store: S,
    library: Library,
}

impl<S: LibraryStore> LibraryService<S> {
    /// Restores the stored library and wraps it in a service.
    pub fn open(store: S) -> RepoResult<Self> {
        let library = Library::from_books(store.restore_local()?);
        Ok(Self { store, library })
    }

    /// Adds a book unless its title is taken, then persists.
    pub fn add_book(&mut self, book: Book) -> Result<(), LibraryServiceError> {
        if self.library.is_in_library(&book) {
            warn!("event=book_add module=service status=rejected reason=duplicate_title");
            return Err(LibraryServiceError::DuplicateTitle(book.title));
        }

        self.commit(|library| library.add_book(book))?;
        info!(
            "event=book_add module=service status=ok count={}",
            self.library.len()
        );
        Ok(())
    }

    /// Removes every book with `title`, then persists.
    ///
    /// Returns the number of removed entries; zero still persists.
    pub fn remove_book(&mut self, title: &str) -> Result<usize, LibraryServiceError> {
        let removed = self.commit(|library| library.remove_book(title))?;
        info!(
            "event=book_remove module=service status=ok removed={removed} count={}",
            self.library.len()
        );
        Ok(removed)
    }

    /// Flips the read flag of the first book with `title`, then persists.
    pub fn toggle_read(&mut self, title: &str) -> Result<bool, LibraryServiceError> {
        let not_found = || LibraryServiceError::BookNotFound(title.to_string());
        if !self.library.contains_title(title) {
            return Err(not_found());
        }
        let is_read = self
            .commit(|library| library.toggle_read(title))?
            .ok_or_else(not_found)?;
        info!("event=book_toggle_read module=service status=ok is_read={is_read}");
        Ok(is_read)
    }

    /// Applies `change` to a copy, saves it, and only then swaps it in.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Library) -> T) -> RepoResult<T> {
        let mut next = self.library.clone();
        let outcome = change(&mut next);
        self.store.save_local(next.books())?;
        self.library = next;
        Ok(outcome)
    }

    pub fn get_book(&self, title: &str) -> Option<&Book> {
        self.library.get_book(title)
    }

    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}
