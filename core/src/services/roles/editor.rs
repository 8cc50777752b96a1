//! Write-side capability variants

use std::fmt;
use std::sync::Arc;

use bson::{doc, oid::ObjectId, Bson};
use tracing::{error, info, warn};

use crate::domain::entities::{account, industry, question};
use crate::domain::entities::{Account, Document, Industry, Qa, Question, Recruit};
use crate::domain::value_objects::{AccountProfile, RecruitProfile};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{
    delete_entity, find_entity, find_one_entity, insert_entity, update_entity, Entity, Filter,
    SharedStore,
};
use crate::services::account::AccountService;

use super::types::{
    parse_id, pick_fields, AccountChanges, QaDetails, RecruitChanges, RecruitDetails,
};

/// What a caller may change, resolved once per request
pub enum Editor {
    Account(AccountEditor),
    Recruit(RecruitEditor),
    System(SystemEditor),
}

impl Editor {
    /// The authenticated account
    pub fn account(&self) -> &Account {
        match self {
            Editor::Account(e) => &e.account,
            Editor::Recruit(e) => &e.account,
            Editor::System(e) => &e.account,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Editor::Account(_) => "ACCOUNT",
            Editor::Recruit(_) => "RECRUIT",
            Editor::System(_) => "SYSTEM",
        }
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("kind", &self.kind())
            .field("account_id", &self.account().id)
            .finish()
    }
}

fn no_changes() -> DomainError {
    DomainError::input("No changes given.")
}

pub struct AccountEditor {
    account: Account,
    store: SharedStore,
    accounts: Arc<AccountService>,
}

impl AccountEditor {
    pub(crate) fn new(account: Account, store: SharedStore, accounts: Arc<AccountService>) -> Self {
        Self {
            account,
            store,
            accounts,
        }
    }

    /// Updates name, surname and email; the email stays unique
    pub async fn update_account(&self, changes: AccountChanges) -> DomainResult<AccountProfile> {
        let mut patch = bson::Document::new();

        if let Some(name) = changes.name {
            account::validate_name("Name", &name)?;
            patch.insert("name", name);
        }
        if let Some(surname) = changes.surname {
            account::validate_name("Surname", &surname)?;
            patch.insert("surname", surname);
        }
        if let Some(email) = changes.email {
            account::validate_email(&email)?;
            let email = email.to_lowercase();
            self.accounts
                .ensure_email_available(&email, Some(&self.account.id))
                .await?;
            patch.insert("email", email);
        }

        if patch.is_empty() {
            return Err(no_changes());
        }

        let updated: Account = update_entity(self.store.as_ref(), &self.account.id, patch).await?;
        Ok(AccountProfile::from(&updated))
    }

    /// Deletes this account and its token manager
    pub async fn remove_account(&self) -> DomainResult<()> {
        self.accounts.remove(&self.account.id).await
    }

    /// Creates and links a recruit profile for this account
    ///
    /// Checked in order: no existing profile, every field present, both
    /// question ids resolvable, then the profile's own field rules.
    pub async fn create_recruit(&self, details: RecruitDetails) -> DomainResult<RecruitProfile> {
        if self.account.recruit_id.is_some() {
            return Err(DomainError::input("Account already has a Recruit profile."));
        }

        let province = require(details.province, "info.province")?;
        let phone = require(details.phone, "info.phone")?;
        let email = require(details.email, "info.email")?;
        let city = require(details.city, "info.city")?;
        let gender = require(details.gender, "info.gender")?;
        let disability = require(details.disability, "info.disability")?;
        let vid1_url = require(details.vid1_url, "info.vid1_url")?;
        let vid2_url = require(details.vid2_url, "info.vid2_url")?;
        let birth_year = require(details.birth_year, "info.birth_year")?;
        let qa1_question_id = require(details.qa1_question_id, "info.qa1_question_id")?;
        let qa1_answer = require(details.qa1_answer, "info.qa1_answer")?;
        let qa2_question_id = require(details.qa2_question_id, "info.qa2_question_id")?;
        let qa2_answer = require(details.qa2_answer, "info.qa2_answer")?;

        let qa1_question = question_text(&self.store, &qa1_question_id, "info.qa1_question_id").await?;
        let qa2_question = question_text(&self.store, &qa2_question_id, "info.qa2_question_id").await?;

        let mut recruit = Recruit {
            id: ObjectId::new(),
            birth_year,
            province,
            city,
            gender,
            disability,
            vid1_url,
            vid2_url,
            phone,
            email,
            qa1: Qa::new(qa1_question, qa1_answer),
            qa2: Qa::new(qa2_question, qa2_answer),
        };
        recruit.normalize()?;

        insert_entity(self.store.as_ref(), &recruit).await?;

        let account: Account = update_entity(
            self.store.as_ref(),
            &self.account.id,
            doc! { "recruit_id": recruit.id },
        )
        .await
        .map_err(|e| {
            error!(account_id = %self.account.id, recruit_id = %recruit.id, error = %e, "Recruit inserted but account link failed");
            DomainError::partial("create recruit profile", "insert recruit", "link account")
        })?;

        info!(account_id = %account.id, recruit_id = %recruit.id, "Recruit profile created");
        Ok(RecruitProfile::new(&recruit, &account))
    }
}

pub struct RecruitEditor {
    recruit: Recruit,
    account: Account,
    store: SharedStore,
}

impl RecruitEditor {
    pub(crate) fn new(recruit: Recruit, account: Account, store: SharedStore) -> Self {
        Self {
            recruit,
            account,
            store,
        }
    }

    /// Partial update; the merged profile must still pass validation
    pub async fn update_recruit(&self, changes: RecruitChanges) -> DomainResult<RecruitProfile> {
        let mut updated = self.recruit.clone();
        let changed = changes.apply(&mut updated);
        if changed.is_empty() {
            return Err(no_changes());
        }
        updated.normalize()?;

        let patch = pick_fields(&updated.to_document()?, &changed)?;
        let recruit: Recruit = update_entity(self.store.as_ref(), &self.recruit.id, patch).await?;
        Ok(RecruitProfile::new(&recruit, &self.account))
    }

    /// Replaces one or both question/answer pairs, returning the new pairs
    pub async fn update_qas(
        &self,
        qa1: Option<QaDetails>,
        qa2: Option<QaDetails>,
    ) -> DomainResult<Vec<Qa>> {
        if qa1.is_none() && qa2.is_none() {
            return Err(DomainError::input("No QAs given."));
        }

        let mut patch = bson::Document::new();
        let mut results = Vec::new();
        for (key, details) in [("qa1", qa1), ("qa2", qa2)] {
            let Some(details) = details else { continue };
            let text = question_text(&self.store, &details.question_id, &format!("{key}.question_id")).await?;
            if details.answer.trim().is_empty() {
                return Err(ValidationError::invalid(format!("{key}.answer")).into());
            }
            let qa = Qa::new(text, details.answer);
            patch.insert(key, bson::to_bson(&qa)?);
            results.push(qa);
        }

        update_entity::<Recruit>(self.store.as_ref(), &self.recruit.id, patch).await?;
        Ok(results)
    }

    /// Deletes the recruit profile and clears the account's reference to it
    pub async fn remove_recruit(&self) -> DomainResult<()> {
        delete_entity::<Recruit>(self.store.as_ref(), &self.recruit.id).await?;

        update_entity::<Account>(
            self.store.as_ref(),
            &self.account.id,
            doc! { "recruit_id": Bson::Null },
        )
        .await
        .map_err(|e| {
            warn!(account_id = %self.account.id, error = %e, "Recruit deleted but account still references it");
            DomainError::partial("remove recruit profile", "delete recruit", "unlink account")
        })?;

        info!(account_id = %self.account.id, recruit_id = %self.recruit.id, "Recruit profile removed");
        Ok(())
    }
}

/// Administrative writes. Every id argument is checked before storage is touched.
pub struct SystemEditor {
    account: Account,
    store: SharedStore,
    accounts: Arc<AccountService>,
}

impl SystemEditor {
    pub(crate) fn new(account: Account, store: SharedStore, accounts: Arc<AccountService>) -> Self {
        Self {
            account,
            store,
            accounts,
        }
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

    pub async fn remove_account(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id, "id")?;
        self.accounts.remove(&id).await
    }

    /// Deletes a recruit profile and unlinks its owner, if it still has one
    pub async fn remove_recruit(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id, "id")?;
        delete_entity::<Recruit>(self.store.as_ref(), &id).await?;

        let owner = match find_one_entity::<Account>(
            self.store.as_ref(),
            &Filter::new().equals("recruit_id", id),
        )
        .await
        {
            Ok(owner) => owner,
            Err(e) if e.is_absent() => return Ok(()),
            Err(e) => {
                warn!(recruit_id = %id, error = %e, "Recruit deleted but its owner lookup failed");
                return Err(DomainError::partial("remove recruit", "delete recruit", "find owner"));
            }
        };

        update_entity::<Account>(self.store.as_ref(), &owner.id, doc! { "recruit_id": Bson::Null })
            .await
            .map_err(|e| {
                warn!(account_id = %owner.id, error = %e, "Recruit deleted but account still references it");
                DomainError::partial("remove recruit", "delete recruit", "unlink account")
            })?;
        Ok(())
    }

    pub async fn create_industry(&self, name: &str) -> DomainResult<Industry> {
        let industry = Industry::new(name)?;
        self.ensure_industry_name_available(&industry.name, None).await?;
        insert_entity(self.store.as_ref(), &industry).await?;
        Ok(industry)
    }

    pub async fn update_industry(&self, id: &str, name: &str) -> DomainResult<Industry> {
        let id = parse_id(id, "id")?;
        let name = industry::normalize_name(name)?;
        self.ensure_industry_name_available(&name, Some(&id)).await?;
        Ok(update_entity(self.store.as_ref(), &id, doc! { "name": name }).await?)
    }

    pub async fn remove_industry(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id, "id")?;
        Ok(delete_entity::<Industry>(self.store.as_ref(), &id).await?)
    }

    /// Adds a question to an existing industry
    pub async fn create_question(&self, industry_id: &str, text: &str) -> DomainResult<Question> {
        let industry_id = parse_id(industry_id, "industry_id")?;
        match find_entity::<Industry>(self.store.as_ref(), &industry_id).await {
            Ok(_) => {}
            Err(e) if e.is_absent() => return Err(DomainError::invalid_field("industry_id")),
            Err(e) => return Err(e.into()),
        }

        let question = Question::new(industry_id, text)?;
        insert_entity(self.store.as_ref(), &question).await?;
        Ok(question)
    }

    pub async fn update_question(&self, id: &str, text: &str) -> DomainResult<Question> {
        let id = parse_id(id, "id")?;
        question::validate_text(text)?;
        Ok(update_entity(self.store.as_ref(), &id, doc! { "question": text }).await?)
    }

    pub async fn remove_question(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id, "id")?;
        Ok(delete_entity::<Question>(self.store.as_ref(), &id).await?)
    }

    pub async fn create_document(
        &self,
        owner_id: &str,
        url: &str,
        doc_type: &str,
        owner_type: &str,
    ) -> DomainResult<Document> {
        let owner_id = parse_id(owner_id, "owner_id")?;
        let document = Document::new(owner_id, url, doc_type, owner_type)?;
        insert_entity(self.store.as_ref(), &document).await?;
        Ok(document)
    }

    pub async fn remove_document(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id, "id")?;
        Ok(delete_entity::<Document>(self.store.as_ref(), &id).await?)
    }

    async fn ensure_industry_name_available(
        &self,
        name: &str,
        owner: Option<&ObjectId>,
    ) -> DomainResult<()> {
        match find_one_entity::<Industry>(self.store.as_ref(), &Filter::new().equals("name", name)).await {
            Ok(existing) if Some(&existing.id) != owner => {
                Err(DomainError::input("An industry by that name already exists."))
            }
            Ok(_) => Ok(()),
            Err(e) if e.is_absent() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::required(field))
}

/// Looks up a question's text; a malformed or unknown id is reported as `field`
async fn question_text(store: &SharedStore, id: &str, field: &str) -> DomainResult<String> {
    let id = parse_id(id, field)?;
    let question: Question = find_entity(store.as_ref(), &id).await.map_err(|e| {
        if !e.is_absent() {
            warn!(question_id = %id, error = %e, "Question lookup failed");
        }
        ValidationError::invalid(field)
    })?;
    Ok(question.question)
}
