use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use mule_shared::validation;

use crate::errors::ValidationError;
use crate::repositories::{Collection, Entity};

/// Screening question belonging to an industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub industry_id: ObjectId,
    pub question: String,
}

impl Question {
    pub fn new(industry_id: ObjectId, question: impl Into<String>) -> Result<Self, ValidationError> {
        let question = question.into();
        validate_text(&question)?;
        Ok(Self {
            id: ObjectId::new(),
            industry_id,
            question,
        })
    }
}

pub fn validate_text(question: &str) -> Result<(), ValidationError> {
    if validation::not_empty(question) {
        Ok(())
    } else {
        Err(ValidationError::invalid("question"))
    }
}

impl Entity for Question {
    const COLLECTION: Collection = Collection::Questions;

    fn id(&self) -> ObjectId {
        self.id
    }
}
