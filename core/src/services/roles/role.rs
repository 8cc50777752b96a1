//! Capability kinds a caller can ask for

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// An explicit `enforce` hint
///
/// Only the exact names `ACCOUNT`, `RECRUIT`, `HUNTER` and `SYSTEM` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Account,
    Recruit,
    /// Accepted by the parser but never resolvable
    Hunter,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Account => "ACCOUNT",
            Role::Recruit => "RECRUIT",
            Role::Hunter => "HUNTER",
            Role::System => "SYSTEM",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCOUNT" => Ok(Role::Account),
            "RECRUIT" => Ok(Role::Recruit),
            "HUNTER" => Ok(Role::Hunter),
            "SYSTEM" => Ok(Role::System),
            _ => Err(ValidationError::invalid("enforce")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
