//! Recruit (candidate) profile entity

use bson::oid::ObjectId;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use mule_shared::validation;

use crate::errors::ValidationError;
use crate::repositories::{Collection, Entity};

/// Earliest accepted birth year
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A screening question together with the recruit's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qa {
    pub question: String,
    pub answer: String,
}

impl Qa {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recruit {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub birth_year: i32,
    pub province: String,
    pub city: String,
    /// "MALE" or "FEMALE" once normalized
    pub gender: String,
    pub disability: String,
    pub vid1_url: String,
    pub vid2_url: String,
    pub phone: String,
    pub email: String,
    pub qa1: Qa,
    pub qa2: Qa,
}

impl Recruit {
    /// Checks every field and upper-cases the gender.
    ///
    /// Birth year must fall in `[1900, current year)`.
    pub fn normalize(&mut self) -> Result<(), ValidationError> {
        let required = [
            ("province", &self.province),
            ("city", &self.city),
        ];
        for (field, value) in required {
            if !validation::not_empty(value) {
                return Err(ValidationError::invalid(field));
            }
        }

        if !validation::is_valid_gender(&self.gender) {
            return Err(ValidationError::invalid("gender"));
        }

        let required = [
            ("phone", &self.phone),
            ("email", &self.email),
            ("qa1.question", &self.qa1.question),
            ("qa1.answer", &self.qa1.answer),
            ("qa2.question", &self.qa2.question),
            ("qa2.answer", &self.qa2.answer),
        ];
        for (field, value) in required {
            if !validation::not_empty(value) {
                return Err(ValidationError::invalid(field));
            }
        }

        let current_year = Utc::now().year();
        if self.birth_year < MIN_BIRTH_YEAR || self.birth_year >= current_year {
            return Err(ValidationError::OutOfRange {
                field: "birth_year".to_string(),
                min: i64::from(MIN_BIRTH_YEAR),
                max: i64::from(current_year - 1),
            });
        }

        self.gender = self.gender.to_uppercase();
        Ok(())
    }

    /// Age in whole years as of the current calendar year
    pub fn age(&self) -> i32 {
        Utc::now().year() - self.birth_year
    }
}

impl Entity for Recruit {
    const COLLECTION: Collection = Collection::Recruits;

    fn id(&self) -> ObjectId {
        self.id
    }
}
