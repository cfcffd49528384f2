//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the storage seam used by the library service.
//! - Keep SQL and JSON encoding details out of the service layer.

pub mod library_store;
