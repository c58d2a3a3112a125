//! Database models.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer account, mirrored from the external account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Opaque identifier assigned by the directory.
    pub id: String,
    /// Display name
    pub name: String,
}

/// The four free-text fields of a weekly plan.
///
/// Every field is `None` when no plan has been saved for the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PlanFields {
    pub objectives: Option<String>,
    pub actions: Option<String>,
    pub objections: Option<String>,
    pub recap: Option<String>,
}

/// A stored contact for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// Random UUID assigned on insert.
    pub id: String,
    pub account_id: String,
    pub name: String,
    /// One of `buyer`, `manager`, `owner`.
    pub role: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    /// Creation timestamp (UTC, millisecond precision).
    pub created_at: String,
}

/// Fields supplied when appending a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub role: ContactRole,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Allowed contact roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactRole {
    #[default]
    Buyer,
    Manager,
    Owner,
}

impl ContactRole {
    pub const ALL: [ContactRole; 3] = [ContactRole::Buyer, ContactRole::Manager, ContactRole::Owner];

    /// Coerce free-form input into a role.
    ///
    /// Input is trimmed and lower-cased; anything outside the allowlist
    /// becomes [`ContactRole::Buyer`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "manager" => ContactRole::Manager,
            "owner" => ContactRole::Owner,
            _ => ContactRole::Buyer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Buyer => "buyer",
            ContactRole::Manager => "manager",
            ContactRole::Owner => "owner",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
