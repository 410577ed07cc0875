//! Defines the user store trait.

use crate::{
    Error,
    models::{PasswordHash, User, UserId},
};

/// Handles the persistence of users.
pub trait UserStore {
    /// Persist a new user and return the stored record.
    ///
    /// The email must already be validated and the password hashed; stores
    /// never see raw credentials.
    ///
    /// # Errors
    /// Returns [Error::DuplicateEmail] if the email is already registered,
    /// or [Error::SqlError] if the write fails.
    fn create(&self, email: &str, password_hash: PasswordHash) -> Result<User, Error>;

    /// Retrieve the user with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a registered
    /// user, or [Error::SqlError] for any other failure.
    fn get_by_id(&self, id: UserId) -> Result<User, Error>;

    /// Retrieve the user registered with `email`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no user registered with `email`, or
    /// [Error::SqlError] for any other failure.
    fn get_by_email(&self, email: &str) -> Result<User, Error>;
}
