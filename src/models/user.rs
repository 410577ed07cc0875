//! Defines the user of the application, an entity that owns accounts and
//! transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, models::PasswordHash};

/// The ID of a [User].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID.
    ///
    /// Should only be used by stores when loading or creating records.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The ID as a 64-bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// Users own accounts and transactions; the ownership checks throughout the
/// API compare against [User::id].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: String,
    password_hash: PasswordHash,
}

impl User {
    /// Create a user record from its parts.
    ///
    /// Should only be used by stores when loading or creating records. To
    /// register a user, go through the `/auth/signup` endpoint which
    /// validates the email and hashes the password first.
    pub fn new(id: UserId, email: String, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    /// The ID of the user.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The email address the user registered with.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The hash of the user's password.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// Check that `email` plausibly is an email address and return it trimmed.
///
/// This is deliberately loose (a non-empty local part and domain around a
/// single `@`). The address is only used as a login identifier, so the
/// definitive check is whether mail arrives, not RFC 5322.
pub(crate) fn validate_email(email: &str) -> Result<&str, Error> {
    let email = email.trim();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(Error::InvalidEmail(email.to_string())),
    }
}

#[cfg(test)]
mod validate_email_tests {
    use super::validate_email;
    use crate::Error;

    #[test]
    fn accepts_and_trims_plausible_address() {
        assert_eq!(validate_email("  test@example.com "), Ok("test@example.com"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_eq!(
            validate_email("test.example.com"),
            Err(Error::InvalidEmail("test.example.com".to_string()))
        );
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(validate_email("test@localhost").is_err());
    }
}
