use std::fmt;

/// The closed set of collections the backend reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    TokenManagers,
    Recruits,
    Industries,
    Questions,
    Documents,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Accounts,
        Collection::TokenManagers,
        Collection::Recruits,
        Collection::Industries,
        Collection::Questions,
        Collection::Documents,
    ];

    /// Collection name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Accounts => "accounts",
            Collection::TokenManagers => "token_managers",
            Collection::Recruits => "recruits",
            Collection::Industries => "industries",
            Collection::Questions => "questions",
            Collection::Documents => "documents",
        }
    }

    /// Fields carrying a unique index in the real backend
    pub fn unique_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Accounts => &["email"],
            Collection::TokenManagers => &["account_id", "refresh_token"],
            Collection::Industries => &["name"],
            Collection::Documents => &["url"],
            Collection::Recruits | Collection::Questions => &[],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
