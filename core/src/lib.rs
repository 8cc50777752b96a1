//! # Mule Core
//!
//! Core business logic and domain layer for the Mule recruiting backend.
//! This crate contains the domain entities, the document store contract with
//! its in-memory backend, token issuing, the account lifecycle, and the
//! Viewer/Editor role resolution that every authenticated request goes through.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Industry, Qa, Question, Recruit, TokenManager, TokenPair};
pub use domain::value_objects::{AccountProfile, RecruitProfile, RequestContext};
pub use errors::{AuthError, DomainError, DomainResult, StoreError, ValidationError};
pub use repositories::{Collection, DocumentStore, Filter, InMemoryStore, SharedStore};
pub use services::{AppServices, Editor, Viewer};
