//! Value objects representing immutable domain concepts.

pub mod profile;
pub mod request_context;

// Re-export commonly used types
pub use profile::{AccountProfile, RecruitProfile};
pub use request_context::RequestContext;
