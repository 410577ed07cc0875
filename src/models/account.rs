//! Defines the bank account model, the entity that transactions reference.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    models::{DatabaseId, UserId},
};

/// The ID of an [Account].
pub type AccountId = DatabaseId;

/// A bank account (or credit card) owned by a user.
///
/// The owning user id is set when the account is created and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The ID of the account.
    #[serde(rename = "_id")]
    pub id: AccountId,
    /// The ID of the user that owns this account.
    pub user_id: UserId,
    /// The display name of the account.
    pub name: String,
}

/// The raw, untrusted field set of a create or edit account request.
///
/// The optional `userId` is accepted for compatibility with existing clients
/// but is never consulted: ownership always comes from the authenticated
/// requester and, for edits, the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountPayload {
    /// The ID of the account to edit. Ignored when creating.
    #[serde(rename = "_id")]
    pub id: Option<AccountId>,
    /// The display name of the account.
    pub name: Option<String>,
    /// Claimed owner. See the type level docs: never trusted.
    pub user_id: Option<UserId>,
}

/// The validated and normalized fields of an account payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFields {
    /// The trimmed, non-empty display name.
    pub name: String,
}

impl AccountFields {
    /// Validate and normalize an untrusted payload. Pure, no I/O.
    ///
    /// # Errors
    /// Returns [Error::MissingField] if the name is absent or empty after
    /// trimming.
    pub fn validate(payload: &AccountPayload) -> Result<Self, Error> {
        match payload.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(Self {
                name: name.to_string(),
            }),
            _ => Err(Error::MissingField("name")),
        }
    }
}
