//! Token service module for JWT management
//!
//! Access tokens are short lived and carry the caller's user agent; refresh
//! tokens are long lived, stored on the account's token manager and rotated
//! lazily at login.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
