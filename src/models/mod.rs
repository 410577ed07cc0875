//! Contains the domain models for the application and the per-field
//! validation that turns untrusted request payloads into typed records.

mod account;
mod amount;
mod password;
mod transaction;
mod user;

pub use account::{Account, AccountFields, AccountId, AccountPayload};
pub use amount::Amount;
pub use password::PasswordHash;
pub use transaction::{
    DATE_FORMAT, Transaction, TransactionFields, TransactionPayload, TransactionType, mdy_date,
    parse_transaction_date,
};
pub use user::{User, UserId};
pub(crate) use user::validate_email;

/// Alias for the integer type used for the IDs of stored records.
pub type DatabaseId = i64;
