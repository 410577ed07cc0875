//! SQLite backed implementations of the store traits.
//!
//! All three stores share one connection behind an `Arc<Mutex<_>>`; each
//! operation locks, runs a single statement (or two for the cascade case)
//! and unlocks, which gives the single-record atomicity the workflows rely
//! on.

mod account;
mod transaction;
mod user;

pub use account::{SQLiteAccountStore, create_account_table};
pub use transaction::{SQLiteTransactionStore, create_transaction_table};
pub use user::{SQLiteUserStore, create_user_table};
