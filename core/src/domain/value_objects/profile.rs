//! Read models handed back to callers. Neither carries the password hash.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, Qa, Recruit};

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub access_level: i32,
    pub hunter_id: Option<String>,
    pub recruit_id: Option<String>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_hex(),
            email: account.email.clone(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            access_level: account.access_level,
            hunter_id: account.hunter_id.map(|id| id.to_hex()),
            recruit_id: account.recruit_id.map(|id| id.to_hex()),
        }
    }
}

/// Recruit profile joined with the owning account's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitProfile {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub province: String,
    pub city: String,
    pub gender: String,
    pub disability: String,
    pub vid1_url: String,
    pub vid2_url: String,
    pub qa1: Qa,
    pub qa2: Qa,
}

impl RecruitProfile {
    pub fn new(recruit: &Recruit, account: &Account) -> Self {
        Self {
            id: recruit.id.to_hex(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            age: recruit.age(),
            phone: recruit.phone.clone(),
            email: recruit.email.clone(),
            province: recruit.province.clone(),
            city: recruit.city.clone(),
            gender: recruit.gender.clone(),
            disability: recruit.disability.clone(),
            vid1_url: recruit.vid1_url.clone(),
            vid2_url: recruit.vid2_url.clone(),
            qa1: recruit.qa1.clone(),
            qa2: recruit.qa2.clone(),
        }
    }
}
