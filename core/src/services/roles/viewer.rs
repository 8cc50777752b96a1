//! Read-side capability variants

use std::fmt;

use tracing::error;

use crate::domain::entities::{Account, Document, Question, Recruit};
use crate::domain::value_objects::{AccountProfile, RecruitProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{find_entity, list_entities, SharedStore};

/// What a caller may read, resolved once per request
pub enum Viewer {
    /// No token was presented
    Guest,
    Account(AccountViewer),
    Recruit(RecruitViewer),
    System(SystemViewer),
}

impl Viewer {
    pub fn is_guest(&self) -> bool {
        matches!(self, Viewer::Guest)
    }

    /// The authenticated account, absent for guests
    pub fn account(&self) -> Option<&Account> {
        match self {
            Viewer::Guest => None,
            Viewer::Account(v) => Some(&v.account),
            Viewer::Recruit(v) => Some(&v.account),
            Viewer::System(v) => Some(&v.account),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Viewer::Guest => "GUEST",
            Viewer::Account(_) => "ACCOUNT",
            Viewer::Recruit(_) => "RECRUIT",
            Viewer::System(_) => "SYSTEM",
        }
    }
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("kind", &self.kind())
            .field("account_id", &self.account().map(|a| a.id))
            .finish()
    }
}

pub struct AccountViewer {
    account: Account,
}

impl AccountViewer {
    pub(crate) fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn id(&self) -> String {
        self.account.id.to_hex()
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }

    pub fn surname(&self) -> &str {
        &self.account.surname
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    pub fn is_hunter(&self) -> bool {
        self.account.is_hunter()
    }

    pub fn is_recruit(&self) -> bool {
        self.account.is_recruit()
    }

    /// Whether `password` matches the account's stored hash
    pub async fn check_password(&self, password: &str) -> bool {
        let account = self.account.clone();
        let password = password.to_string();
        match tokio::task::spawn_blocking(move || account.check_password(&password)).await {
            Ok(matches) => matches,
            Err(e) => {
                error!(error = %e, "Password check task failed");
                false
            }
        }
    }
}

pub struct RecruitViewer {
    recruit: Recruit,
    account: Account,
    store: SharedStore,
}

impl RecruitViewer {
    pub(crate) fn new(recruit: Recruit, account: Account, store: SharedStore) -> Self {
        Self {
            recruit,
            account,
            store,
        }
    }

    /// The recruit profile's id
    pub fn id(&self) -> String {
        self.recruit.id.to_hex()
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }

    pub fn surname(&self) -> &str {
        &self.account.surname
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// The recruit profile joined with a fresh read of the owning account
    pub async fn profile(&self) -> DomainResult<RecruitProfile> {
        let account: Account = find_entity(self.store.as_ref(), &self.account.id)
            .await
            .map_err(|e| {
                error!(account_id = %self.account.id, error = %e, "Failed to reload account for recruit profile");
                DomainError::Generic
            })?;
        Ok(RecruitProfile::new(&self.recruit, &account))
    }
}

pub struct SystemViewer {
    account: Account,
    store: SharedStore,
}

impl SystemViewer {
    pub(crate) fn new(account: Account, store: SharedStore) -> Self {
        Self { account, store }
    }

    pub fn id(&self) -> String {
        self.account.id.to_hex()
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }

    pub fn surname(&self) -> &str {
        &self.account.surname
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    pub async fn accounts(&self) -> DomainResult<Vec<AccountProfile>> {
        let accounts: Vec<Account> = list_entities(self.store.as_ref()).await?;
        Ok(accounts.iter().map(AccountProfile::from).collect())
    }

    pub async fn recruits(&self) -> DomainResult<Vec<Recruit>> {
        Ok(list_entities(self.store.as_ref()).await?)
    }

    pub async fn questions(&self) -> DomainResult<Vec<Question>> {
        Ok(list_entities(self.store.as_ref()).await?)
    }

    pub async fn documents(&self) -> DomainResult<Vec<Document>> {
        Ok(list_entities(self.store.as_ref()).await?)
    }
}
