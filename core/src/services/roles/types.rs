//! Input types for editor operations

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Recruit;
use crate::errors::{StoreError, ValidationError};

/// Partial account update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

/// Everything needed to create a recruit profile
///
/// Every field is required. The question ids are resolved against the
/// question catalog for their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitDetails {
    pub province: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub disability: Option<String>,
    pub vid1_url: Option<String>,
    pub vid2_url: Option<String>,
    pub birth_year: Option<i32>,
    pub qa1_question_id: Option<String>,
    pub qa1_answer: Option<String>,
    pub qa2_question_id: Option<String>,
    pub qa2_answer: Option<String>,
}

/// Partial recruit update; question/answer pairs go through `update_qas`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitChanges {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub disability: Option<String>,
    pub vid1_url: Option<String>,
    pub vid2_url: Option<String>,
    pub birth_year: Option<i32>,
}

impl RecruitChanges {
    /// Writes the given fields into `recruit` and returns their names
    pub(crate) fn apply(self, recruit: &mut Recruit) -> Vec<&'static str> {
        let mut changed = Vec::new();
        let text_fields = [
            ("phone", self.phone, &mut recruit.phone),
            ("email", self.email, &mut recruit.email),
            ("province", self.province, &mut recruit.province),
            ("city", self.city, &mut recruit.city),
            ("gender", self.gender, &mut recruit.gender),
            ("disability", self.disability, &mut recruit.disability),
            ("vid1_url", self.vid1_url, &mut recruit.vid1_url),
            ("vid2_url", self.vid2_url, &mut recruit.vid2_url),
        ];
        for (field, value, slot) in text_fields {
            if let Some(value) = value {
                *slot = value;
                changed.push(field);
            }
        }
        if let Some(birth_year) = self.birth_year {
            recruit.birth_year = birth_year;
            changed.push("birth_year");
        }
        changed
    }
}

/// A question reference plus the recruit's answer to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaDetails {
    pub question_id: String,
    pub answer: String,
}

impl QaDetails {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }
}

/// Parses a hex object id, reporting `field` when it is malformed
pub(crate) fn parse_id(value: &str, field: &str) -> Result<ObjectId, ValidationError> {
    ObjectId::parse_str(value).map_err(|_| ValidationError::invalid(field))
}

/// Copies the named fields of a serialized entity into an update patch
pub(crate) fn pick_fields(full: &Document, fields: &[&str]) -> Result<Document, StoreError> {
    fields
        .iter()
        .map(|field| {
            full.get(*field)
                .cloned()
                .map(|value| (field.to_string(), value))
                .ok_or_else(|| StoreError::Serialization {
                    message: format!("missing field '{field}'"),
                })
        })
        .collect()
}
