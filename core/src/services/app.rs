//! Entry points a transport layer binds to

use std::sync::Arc;

use mule_shared::config::AppConfig;

use crate::domain::entities::{Industry, Question, TokenPair};
use crate::domain::value_objects::RequestContext;
use crate::errors::DomainResult;
use crate::repositories::SharedStore;

use super::account::{AccountDetails, AccountService, AccountServiceConfig};
use super::catalog::CatalogService;
use super::roles::{Editor, RoleResolver, Viewer};
use super::token::{TokenService, TokenServiceConfig};

/// All services wired over one store handle
pub struct AppServices {
    store: SharedStore,
    tokens: Arc<TokenService>,
    accounts: Arc<AccountService>,
    roles: RoleResolver,
    catalog: CatalogService,
}

impl AppServices {
    pub fn new(store: SharedStore, config: &AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let accounts = Arc::new(AccountService::new(
            store.clone(),
            tokens.clone(),
            AccountServiceConfig::from(&config.auth),
        ));
        let roles = RoleResolver::new(store.clone(), tokens.clone(), accounts.clone());
        let catalog = CatalogService::new(store.clone());

        Self {
            store,
            tokens,
            accounts,
            roles,
            catalog,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub async fn view(&self, token: Option<&str>, enforce: Option<&str>) -> DomainResult<Viewer> {
        self.roles.view(token, enforce).await
    }

    pub async fn edit(&self, token: &str, enforce: Option<&str>) -> DomainResult<Editor> {
        self.roles.edit(token, enforce).await
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ctx: &RequestContext,
    ) -> DomainResult<TokenPair> {
        self.accounts.login(email, password, ctx).await
    }

    pub async fn create_account(
        &self,
        details: AccountDetails,
        ctx: &RequestContext,
    ) -> DomainResult<TokenPair> {
        self.accounts.create(details, ctx).await
    }

    pub async fn industries(&self) -> DomainResult<Vec<Industry>> {
        self.catalog.industries().await
    }

    pub async fn questions(&self) -> DomainResult<Vec<Question>> {
        self.catalog.questions().await
    }

    pub async fn random_questions(&self, industry_id: &str) -> DomainResult<Vec<Question>> {
        self.catalog.random_questions(industry_id).await
    }
}
