//! Role resolution module
//!
//! Every authenticated request is resolved into exactly one capability
//! variant: a `Viewer` for reads (Guest, Account, Recruit, System) or an
//! `Editor` for writes (Account, Recruit, System). Operations that a
//! variant does not expose cannot be called on it.

mod editor;
mod resolver;
mod role;
mod types;
mod viewer;

#[cfg(test)]
mod tests;

pub use editor::{AccountEditor, Editor, RecruitEditor, SystemEditor};
pub use resolver::RoleResolver;
pub use role::Role;
pub use types::{AccountChanges, QaDetails, RecruitChanges, RecruitDetails};
pub use viewer::{AccountViewer, RecruitViewer, SystemViewer, Viewer};

pub(crate) use types::parse_id;
