//! Public catalog reads that need no token

mod service;


pub use service::{CatalogService, RANDOM_QUESTION_COUNT};
