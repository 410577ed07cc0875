//! Defines the account store trait.

use crate::{
    Error,
    models::{Account, AccountFields, AccountId, UserId},
};

/// Handles the persistence of accounts.
pub trait AccountStore {
    /// Persist a new account owned by `user_id` and return the stored
    /// record.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the write fails.
    fn create(&self, user_id: UserId, fields: AccountFields) -> Result<Account, Error>;

    /// Retrieve the account with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored account,
    /// or [Error::SqlError] for any other failure.
    fn get(&self, id: AccountId) -> Result<Account, Error>;

    /// Retrieve all accounts owned by `user_id`, in insertion order.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the query fails.
    fn get_by_user(&self, user_id: UserId) -> Result<Vec<Account>, Error>;

    /// Rename account `id`. The owner is immutable and left untouched.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored account,
    /// or [Error::SqlError] if the write fails.
    fn update(&self, id: AccountId, fields: AccountFields) -> Result<(), Error>;

    /// Delete the account with `id`.
    ///
    /// Whether transactions that reference the account are deleted alongside
    /// it is the workflow's decision, not the store's; see
    /// [AccountDeletion](crate::AccountDeletion).
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored account,
    /// or [Error::SqlError] if the write fails.
    fn delete(&self, id: AccountId) -> Result<(), Error>;
}
