//! Business services containing domain logic and use cases.

pub mod account;
pub mod app;
pub mod catalog;
pub mod roles;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use account::{AccountDetails, AccountService, AccountServiceConfig};
pub use app::AppServices;
pub use catalog::CatalogService;
pub use roles::{
    AccountChanges, AccountEditor, AccountViewer, Editor, QaDetails, RecruitChanges,
    RecruitDetails, RecruitEditor, RecruitViewer, Role, RoleResolver, SystemEditor, SystemViewer,
    Viewer,
};
pub use token::{TokenService, TokenServiceConfig};
