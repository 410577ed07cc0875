//! Defines the password hash type used for user credentials.
//!
//! Raw passwords are hashed at the registration boundary and only the hash
//! is ever stored or compared.

use crate::Error;

/// The minimum length of a raw password, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A bcrypt hash of a user's password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a raw password.
    ///
    /// # Errors
    /// Returns [Error::InvalidCredentials] if the password is shorter than
    /// [MIN_PASSWORD_LENGTH], or [Error::HashingError] if the underlying
    /// hashing library fails.
    pub fn new(raw_password: &str) -> Result<Self, Error> {
        if raw_password.len() < MIN_PASSWORD_LENGTH {
            return Err(Error::InvalidCredentials);
        }

        bcrypt::hash(raw_password, bcrypt::DEFAULT_COST)
            .map(Self)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// Wrap an existing hash string.
    ///
    /// Should only be used by stores when loading records.
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    /// Check whether `raw_password` matches this hash.
    ///
    /// # Errors
    /// Returns [Error::HashingError] if the underlying hashing library fails.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        bcrypt::verify(raw_password, &self.0)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// The hash as a string, for persisting.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
