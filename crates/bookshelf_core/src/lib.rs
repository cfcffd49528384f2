//! Core domain logic for bookshelf.
//! This crate owns the book collection rules and their persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use model::library::Library;
pub use repo::library_store::{
    books_from_json, books_to_json, LibraryStore, RepoError, RepoResult, SqliteLibraryStore,
    LIBRARY_STORAGE_KEY,
};
pub use service::library_service::{
    LibraryService, LibraryServiceError, DUPLICATE_BOOK_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
