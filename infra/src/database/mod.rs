//! Database module - MongoDB implementations
//!
//! This module provides the document database access layer:
//! - Client construction and pool sizing
//! - Unique index bootstrap
//! - The `DocumentStore` backend used outside tests

pub mod connection;
pub mod mongo_store;


// Re-export commonly used types
pub use connection::{IndexReport, MongoConnection};
pub use mongo_store::MongoDocumentStore;
