//! Shared fixtures for service tests

use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::entities::{Account, Industry, Question, Recruit};
use crate::domain::value_objects::RequestContext;
use crate::repositories::{
    find_entity, insert_entity, Collection, InMemoryStore, SharedStore,
};
use crate::services::account::{AccountDetails, AccountService, AccountServiceConfig};
use crate::services::roles::{Editor, RecruitDetails, RoleResolver};
use crate::services::token::{TokenService, TokenServiceConfig};

pub const USER_AGENT: &str = "test-agent/1.0";

pub struct Fixture {
    pub memory: Arc<InMemoryStore>,
    pub store: SharedStore,
    pub tokens: Arc<TokenService>,
    pub accounts: Arc<AccountService>,
}

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }
}

pub fn fixture() -> Fixture {
    let memory = Arc::new(InMemoryStore::new());
    let store: SharedStore = memory.clone();
    let tokens = Arc::new(TokenService::new(token_config()));
    let accounts = Arc::new(AccountService::new(
        store.clone(),
        tokens.clone(),
        AccountServiceConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    ));
    Fixture {
        memory,
        store,
        tokens,
        accounts,
    }
}

pub fn ctx() -> RequestContext {
    RequestContext::new(USER_AGENT)
}

pub fn ann() -> AccountDetails {
    AccountDetails::new("a@b.com", "123456", "Ann", "Lee")
}

/// A complete recruit profile answering `q1` and `q2`
pub fn recruit_details(q1: &Question, q2: &Question) -> RecruitDetails {
    RecruitDetails {
        province: Some("Gauteng".to_string()),
        phone: Some("0821234567".to_string()),
        email: Some("ann@work.com".to_string()),
        city: Some("Pretoria".to_string()),
        gender: Some("female".to_string()),
        disability: Some("none".to_string()),
        vid1_url: Some("https://videos.example.com/1".to_string()),
        vid2_url: Some("https://videos.example.com/2".to_string()),
        birth_year: Some(1990),
        qa1_question_id: Some(q1.id.to_hex()),
        qa1_answer: Some("Family trade".to_string()),
        qa2_question_id: Some(q2.id.to_hex()),
        qa2_answer: Some("Four".to_string()),
    }
}

impl Fixture {
    pub fn roles(&self) -> RoleResolver {
        RoleResolver::new(self.store.clone(), self.tokens.clone(), self.accounts.clone())
    }

    /// Creates a recruit profile for the account behind `access_token`
    pub async fn attach_recruit(&self, access_token: &str) -> Recruit {
        let q1 = self.seed_question("Why mining?").await;
        let q2 = self.seed_question("Years underground?").await;
        let Editor::Account(editor) = self
            .roles()
            .edit(access_token, Some("ACCOUNT"))
            .await
            .unwrap()
        else {
            panic!("expected an account editor");
        };
        let profile = editor
            .create_recruit(recruit_details(&q1, &q2))
            .await
            .unwrap();
        let id = ObjectId::parse_str(&profile.id).unwrap();
        find_entity::<Recruit>(self.store.as_ref(), &id).await.unwrap()
    }

    /// Creates an account through the service and returns it with its access token
    pub async fn create_account(&self, details: AccountDetails) -> (Account, String) {
        let pair = self.accounts.create(details, &ctx()).await.unwrap();
        let claims = self.tokens.parse(&pair.access_token).unwrap();
        let id = ObjectId::parse_str(&claims.account_id).unwrap();
        let account = find_entity::<Account>(self.store.as_ref(), &id)
            .await
            .unwrap();
        (account, pair.access_token)
    }

    /// Raises an account above the system threshold
    pub async fn promote(&self, account: &Account) {
        self.store
            .update_by_id(
                Collection::Accounts,
                &account.id,
                bson::doc! { "access_level": 9 },
            )
            .await
            .unwrap();
    }

    pub async fn seed_question(&self, text: &str) -> Question {
        let industry = Industry::new("mining").unwrap();
        insert_entity(self.store.as_ref(), &industry).await.unwrap();
        let question = Question::new(industry.id, text).unwrap();
        insert_entity(self.store.as_ref(), &question).await.unwrap();
        question
    }
}
