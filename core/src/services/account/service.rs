//! Account lifecycle: creation, removal and login

use std::sync::Arc;

use bson::{doc, oid::ObjectId};
use tracing::{debug, error, info, warn};

use crate::domain::entities::account::{self, Account};
use crate::domain::entities::{TokenManager, TokenPair};
use crate::domain::value_objects::RequestContext;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{
    delete_entity, find_one_entity, insert_entity, update_entity, Filter, SharedStore,
};
use crate::services::token::TokenService;

use super::config::AccountServiceConfig;
use super::types::AccountDetails;

/// Creates, removes and authenticates accounts.
///
/// Multi-step writes are not transactional. A failure after the first write
/// is reported as `PartialFailure` and the committed steps stay in place.
pub struct AccountService {
    store: SharedStore,
    tokens: Arc<TokenService>,
    config: AccountServiceConfig,
}

impl AccountService {
    pub fn new(store: SharedStore, tokens: Arc<TokenService>, config: AccountServiceConfig) -> Self {
        Self {
            store,
            tokens,
            config,
        }
    }

    /// Create an account and its token manager, returning a fresh token pair
    ///
    /// All validation happens before the first write:
    /// 1. every field present (`info.email`, `info.password`, ...)
    /// 2. email format, password length, name and surname letters
    /// 3. email not already registered (compared lower-cased)
    pub async fn create(
        &self,
        details: AccountDetails,
        ctx: &RequestContext,
    ) -> DomainResult<TokenPair> {
        let email = details.email.ok_or_else(|| ValidationError::required("info.email"))?;
        let password = details
            .password
            .ok_or_else(|| ValidationError::required("info.password"))?;
        let name = details.name.ok_or_else(|| ValidationError::required("info.name"))?;
        let surname = details
            .surname
            .ok_or_else(|| ValidationError::required("info.surname"))?;

        account::validate_email(&email)?;
        account::validate_password(&password, self.config.min_password_length)?;
        account::validate_name("Name", &name)?;
        account::validate_name("Surname", &surname)?;

        let email = email.to_lowercase();
        self.ensure_email_available(&email, None).await?;

        let password_hash = self.hash_password(password).await?;
        let account = Account::new(&email, password_hash, name, surname);

        insert_entity(self.store.as_ref(), &account).await?;

        let pair = self.tokens.issue_pair(&account.id, &ctx.user_agent).map_err(|e| {
            error!(account_id = %account.id, error = %e, "Token issue failed after account insert");
            DomainError::partial("create account", "insert account", "issue tokens")
        })?;

        let manager = TokenManager::new(
            account.id,
            pair.access_token.clone(),
            pair.refresh_token.clone(),
            self.config.max_tokens,
        );
        insert_entity(self.store.as_ref(), &manager).await.map_err(|e| {
            error!(account_id = %account.id, error = %e, "Token manager insert failed; account left without one");
            DomainError::partial("create account", "insert account", "insert token manager")
        })?;

        info!(account_id = %account.id, "Account created");
        Ok(pair)
    }

    /// Delete an account, then its token manager
    ///
    /// Fails with the store's `NotFound` when the account does not exist.
    pub async fn remove(&self, account_id: &ObjectId) -> DomainResult<()> {
        delete_entity::<Account>(self.store.as_ref(), account_id).await?;

        let manager: TokenManager = find_one_entity(
            self.store.as_ref(),
            &Filter::new().equals("account_id", *account_id),
        )
        .await
        .map_err(|e| {
            warn!(account_id = %account_id, error = %e, "Account deleted but its token manager could not be found");
            DomainError::partial("remove account", "delete account", "find token manager")
        })?;

        delete_entity::<TokenManager>(self.store.as_ref(), &manager.id)
            .await
            .map_err(|e| {
                warn!(account_id = %account_id, error = %e, "Account deleted but its token manager was not");
                DomainError::partial("remove account", "delete account", "delete token manager")
            })?;

        info!(account_id = %account_id, "Account removed");
        Ok(())
    }

    /// Authenticate with email and password
    ///
    /// The stored refresh token is replaced when it no longer parses or
    /// expires within the rotation window; otherwise it is returned as is.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ctx: &RequestContext,
    ) -> DomainResult<TokenPair> {
        let email = email.to_lowercase();
        let account: Account =
            match find_one_entity(self.store.as_ref(), &Filter::new().equals("email", email.as_str())).await {
                Ok(account) => account,
                Err(e) if e.is_absent() => {
                    debug!("Login attempt for unknown email");
                    return Err(AuthError::InvalidCredentials.into());
                }
                Err(e) => return Err(e.into()),
            };

        if !self.verify_password(&account, password).await? {
            debug!(account_id = %account.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut manager: TokenManager = find_one_entity(
            self.store.as_ref(),
            &Filter::new().equals("account_id", account.id),
        )
        .await
        .map_err(|e| {
            error!(account_id = %account.id, error = %e, "Token manager missing at login");
            DomainError::Generic
        })?;

        if self.tokens.needs_rotation(&manager.refresh_token) {
            let refresh_token = self.tokens.issue_refresh_token(&account.id)?;
            manager = update_entity(
                self.store.as_ref(),
                &manager.id,
                doc! { "refresh_token": refresh_token.as_str() },
            )
            .await?;
            info!(account_id = %account.id, "Refresh token rotated");
        }

        let access_token = self.tokens.issue_access_token(&account.id, &ctx.user_agent)?;
        Ok(TokenPair::new(access_token, manager.refresh_token))
    }

    /// Fails with `Input` when another account already uses `email`.
    /// `owner` is excluded from the check.
    pub(crate) async fn ensure_email_available(
        &self,
        email: &str,
        owner: Option<&ObjectId>,
    ) -> DomainResult<()> {
        match find_one_entity::<Account>(self.store.as_ref(), &Filter::new().equals("email", email)).await {
            Ok(existing) if Some(&existing.id) != owner => {
                Err(DomainError::input("An account with that email already exists."))
            }
            Ok(_) => Ok(()),
            Err(e) if e.is_absent() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// bcrypt is CPU bound; run it off the async workers
    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(DomainError::internal)?
            .map_err(DomainError::internal)
    }

    async fn verify_password(&self, account: &Account, password: &str) -> DomainResult<bool> {
        let account = account.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || account.check_password(&password))
            .await
            .map_err(DomainError::internal)
    }
}
