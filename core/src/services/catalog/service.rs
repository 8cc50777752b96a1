use rand::seq::SliceRandom;

use crate::domain::entities::{Industry, Question};
use crate::errors::DomainResult;
use crate::repositories::{find_entities, list_entities, Filter, SharedStore};
use crate::services::roles::parse_id;

/// Questions handed to a prospective recruit per industry
pub const RANDOM_QUESTION_COUNT: usize = 2;

/// Industries and screening questions, readable by anyone
pub struct CatalogService {
    store: SharedStore,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn industries(&self) -> DomainResult<Vec<Industry>> {
        Ok(list_entities(self.store.as_ref()).await?)
    }

    pub async fn questions(&self) -> DomainResult<Vec<Question>> {
        Ok(list_entities(self.store.as_ref()).await?)
    }

    /// Up to two distinct questions of one industry, in random order
    pub async fn random_questions(&self, industry_id: &str) -> DomainResult<Vec<Question>> {
        let industry_id = parse_id(industry_id, "industry_id")?;
        let filter = Filter::new().equals("industry_id", industry_id);

        let questions: Vec<Question> = match find_entities(self.store.as_ref(), Some(&filter)).await {
            Err(e) if e.is_absent() => Vec::new(),
            other => other?,
        };

        let mut rng = rand::thread_rng();
        Ok(questions
            .choose_multiple(&mut rng, RANDOM_QUESTION_COUNT)
            .cloned()
            .collect())
    }
}
