//! Domain entities representing core business objects.

pub mod account;
pub mod document;
pub mod industry;
pub mod question;
pub mod recruit;
pub mod token;
pub mod token_manager;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, SYSTEM_ACCESS_LEVEL};
pub use document::Document;
pub use industry::Industry;
pub use question::Question;
pub use recruit::{Qa, Recruit, MIN_BIRTH_YEAR};
pub use token::{Claims, TokenPair};
pub use token_manager::TokenManager;
