//! Per-account token bookkeeping.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repositories::{Collection, Entity};

/// One-to-one companion of an [`Account`](super::Account), always looked up
/// by `account_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenManager {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub account_id: ObjectId,

    /// Access tokens handed out when the account was created
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Current long-lived refresh token
    pub refresh_token: String,

    /// Policy value only; nothing prunes `tokens` against it
    pub max_tokens: i32,
}

impl TokenManager {
    pub fn new(account_id: ObjectId, access_token: String, refresh_token: String, max_tokens: i32) -> Self {
        Self {
            id: ObjectId::new(),
            account_id,
            tokens: vec![access_token],
            refresh_token,
            max_tokens,
        }
    }
}

impl Entity for TokenManager {
    const COLLECTION: Collection = Collection::TokenManagers;

    fn id(&self) -> ObjectId {
        self.id
    }
}
