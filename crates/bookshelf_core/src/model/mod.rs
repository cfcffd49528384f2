//! Book-tracking domain model.
//!
//! # Responsibility
//! - Define the book record and the collection that owns it.
//!
//! # Invariants
//! - Book identity is the title string; there is no secondary index.

pub mod book;
pub mod library;
