//! The account workflows: create, list, edit and delete.
//!
//! Accounts follow the same pipeline as transactions, with one extra
//! wrinkle: deleting an account must decide what happens to the
//! transactions that reference it, controlled by the configured
//! [AccountDeletion](crate::AccountDeletion) policy.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use create_endpoint::create_account;
pub use delete_endpoint::delete_account;
pub use edit_endpoint::edit_account;
pub use list_endpoint::get_accounts;
