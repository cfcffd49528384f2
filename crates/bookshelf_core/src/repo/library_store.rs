//! Library snapshot persistence over a key-value table.
//!
//! # Responsibility
//! - Serialize the whole book collection as one JSON list.
//! - Store and load that list under a single storage key.
//!
//! # Invariants
//! - Stored shape is `[{"title","author","pages","isRead"}, ...]`.
//! - A missing key or JSON `null` restores as an empty collection.
//! - Malformed stored data is reported, never silently dropped.

use crate::db::DbError;
use crate::model::book::Book;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized library.
pub const LIBRARY_STORAGE_KEY: &str = "library";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for library snapshot persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored value could not be decoded into books.
    InvalidData(String),
    /// Books could not be encoded for storage.
    Encode(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored library data: {message}"),
            Self::Encode(message) => write!(f, "failed to encode library: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Encode(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the book collection.
pub trait LibraryStore {
    /// Replaces the stored snapshot with `books`.
    fn save_local(&self, books: &[Book]) -> RepoResult<()>;
    /// Loads the stored snapshot, empty when nothing was saved yet.
    fn restore_local(&self) -> RepoResult<Vec<Book>>;
}

/// SQLite-backed local storage for the library snapshot.
pub struct SqliteLibraryStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteLibraryStore<'conn> {
    /// Uses the default `library` storage key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, LIBRARY_STORAGE_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl LibraryStore for SqliteLibraryStore<'_> {
    fn save_local(&self, books: &[Book]) -> RepoResult<()> {
        let payload = books_to_json(books)?;

        self.conn
            .execute(
                "INSERT INTO local_storage (key, value, updated_at)
                 VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at;",
                params![self.key.as_str(), payload],
            )
            .inspect_err(|err| {
                error!(
                    "event=library_save module=repo status=error error_code=write_failed error={err}"
                );
            })?;

        info!(
            "event=library_save module=repo status=ok count={} bytes={}",
            books.len(),
            payload.len()
        );
        Ok(())
    }

    fn restore_local(&self) -> RepoResult<Vec<Book>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let books = match stored {
            Some(payload) => books_from_json(&payload).inspect_err(|_| {
                error!("event=library_restore module=repo status=error error_code=invalid_data");
            })?,
            None => Vec::new(),
        };

        info!(
            "event=library_restore module=repo status=ok count={}",
            books.len()
        );
        Ok(books)
    }
}

/// Encodes books as the stored JSON list.
pub fn books_to_json(books: &[Book]) -> RepoResult<String> {
    serde_json::to_string(books).map_err(|err| RepoError::Encode(err.to_string()))
}

/// Decodes the stored JSON list; `null` decodes as empty.
pub fn books_from_json(payload: &str) -> RepoResult<Vec<Book>> {
    let books: Option<Vec<Book>> =
        serde_json::from_str(payload).map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(books.unwrap_or_default())
}
