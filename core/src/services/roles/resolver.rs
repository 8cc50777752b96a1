//! Per-request capability resolution

use std::sync::Arc;

use bson::oid::ObjectId;
use tracing::{debug, error};

use crate::domain::entities::{Account, Recruit};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{find_entity, SharedStore};
use crate::services::account::AccountService;
use crate::services::token::TokenService;

use super::editor::{AccountEditor, Editor, RecruitEditor, SystemEditor};
use super::role::Role;
use super::viewer::{AccountViewer, RecruitViewer, SystemViewer, Viewer};

/// The variant picked for an authenticated account, before it is wrapped
/// as a viewer or an editor
enum Capability {
    Account,
    Recruit(Recruit),
    System,
}

/// Turns a bearer token and an optional `enforce` hint into a Viewer or Editor.
///
/// Without a hint the priority is fixed: System, then Recruit, then Account.
pub struct RoleResolver {
    store: SharedStore,
    tokens: Arc<TokenService>,
    accounts: Arc<AccountService>,
}

impl RoleResolver {
    pub fn new(store: SharedStore, tokens: Arc<TokenService>, accounts: Arc<AccountService>) -> Self {
        Self {
            store,
            tokens,
            accounts,
        }
    }

    /// Resolve the read-side capability. A missing or empty token is a guest.
    pub async fn view(&self, token: Option<&str>, enforce: Option<&str>) -> DomainResult<Viewer> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(Viewer::Guest),
        };

        let account = self.authenticate(token).await?;
        let viewer = match self.resolve(&account, enforce).await? {
            Capability::System => Viewer::System(SystemViewer::new(account, self.store.clone())),
            Capability::Recruit(recruit) => {
                Viewer::Recruit(RecruitViewer::new(recruit, account, self.store.clone()))
            }
            Capability::Account => Viewer::Account(AccountViewer::new(account)),
        };
        debug!(kind = viewer.kind(), "Viewer resolved");
        Ok(viewer)
    }

    /// Resolve the write-side capability
    pub async fn edit(&self, token: &str, enforce: Option<&str>) -> DomainResult<Editor> {
        let account = self.authenticate(token).await?;
        let editor = match self.resolve(&account, enforce).await? {
            Capability::System => Editor::System(SystemEditor::new(
                account,
                self.store.clone(),
                self.accounts.clone(),
            )),
            Capability::Recruit(recruit) => {
                Editor::Recruit(RecruitEditor::new(recruit, account, self.store.clone()))
            }
            Capability::Account => Editor::Account(AccountEditor::new(
                account,
                self.store.clone(),
                self.accounts.clone(),
            )),
        };
        debug!(kind = editor.kind(), "Editor resolved");
        Ok(editor)
    }

    /// Loads the account behind an access token.
    ///
    /// Refresh tokens, malformed ids and missing accounts all surface as
    /// `InvalidToken`.
    async fn authenticate(&self, token: &str) -> DomainResult<Account> {
        let claims = self.tokens.parse(token)?;
        if claims.refresh {
            debug!("Refresh token presented as bearer credential");
            return Err(DomainError::invalid_token());
        }

        let account_id = ObjectId::parse_str(&claims.account_id).map_err(|_| {
            debug!(account_id = %claims.account_id, "Token carries a malformed account id");
            DomainError::invalid_token()
        })?;

        find_entity(self.store.as_ref(), &account_id).await.map_err(|e| {
            debug!(account_id = %account_id, error = %e, "Failed to load account from token");
            DomainError::invalid_token()
        })
    }

    async fn resolve(&self, account: &Account, enforce: Option<&str>) -> DomainResult<Capability> {
        let hint = enforce.map(str::parse::<Role>).transpose()?;

        match hint {
            Some(Role::Account) => Ok(Capability::Account),
            Some(Role::Recruit) => Ok(Capability::Recruit(self.load_recruit(account).await?)),
            Some(Role::System) => {
                if account.is_system() {
                    Ok(Capability::System)
                } else {
                    Err(DomainError::input("Failed to enforce 'SYSTEM'."))
                }
            }
            Some(Role::Hunter) => Err(DomainError::input("Unimplemented")),
            None => {
                if account.is_system() {
                    return Ok(Capability::System);
                }
                match self.load_recruit(account).await {
                    Ok(recruit) => Ok(Capability::Recruit(recruit)),
                    Err(_) => Ok(Capability::Account),
                }
            }
        }
    }

    async fn load_recruit(&self, account: &Account) -> DomainResult<Recruit> {
        let recruit_id = account
            .recruit_id
            .ok_or_else(|| DomainError::input("Failed to enforce 'RECRUIT'."))?;

        find_entity(self.store.as_ref(), &recruit_id).await.map_err(|e| {
            error!(account_id = %account.id, recruit_id = %recruit_id, error = %e, "Failed to load linked recruit");
            DomainError::Generic
        })
    }
}
