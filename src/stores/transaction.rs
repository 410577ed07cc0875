//! Defines the transaction store trait.

use crate::{
    Error,
    models::{AccountId, DatabaseId, Transaction, TransactionFields, UserId},
};

/// Handles the persistence of transactions.
///
/// Every method maps to a single round trip; transport or database failures
/// surface as [Error::SqlError] so the workflows can report them distinctly
/// from [Error::NotFound].
pub trait TransactionStore {
    /// Persist a new transaction owned by `user_id` and return the stored
    /// record.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the write fails.
    fn create(&self, user_id: UserId, fields: TransactionFields) -> Result<Transaction, Error>;

    /// Retrieve the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction, or [Error::SqlError] for any other failure.
    fn get(&self, id: DatabaseId) -> Result<Transaction, Error>;

    /// Retrieve all transactions owned by `user_id`, in the order the store
    /// keeps them (insertion order for the SQLite store).
    ///
    /// An empty vector is a valid result for a user with no transactions.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the query fails.
    fn get_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, Error>;

    /// Replace every field of transaction `id` with `fields`.
    ///
    /// The owner of the transaction is left untouched.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction, or [Error::SqlError] if the write fails.
    fn update(&self, id: DatabaseId, fields: TransactionFields) -> Result<(), Error>;

    /// Delete the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction, or [Error::SqlError] if the write fails.
    fn delete(&self, id: DatabaseId) -> Result<(), Error>;

    /// Delete every transaction that references `account_id` and return how
    /// many were deleted.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the write fails.
    fn delete_by_account(&self, account_id: AccountId) -> Result<usize, Error>;

    /// Count the transactions that reference `account_id`.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the query fails.
    fn count_by_account(&self, account_id: AccountId) -> Result<usize, Error>;
}
