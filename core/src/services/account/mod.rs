//! Account lifecycle module
//!
//! Account creation pairs every account with a token manager; removal
//! cascades to it. Login lives here too since it reads both records.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::AccountService;
pub use types::AccountDetails;
