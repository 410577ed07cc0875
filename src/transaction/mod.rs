//! The transaction workflows: create, list, edit and delete.
//!
//! Every workflow runs the same pipeline: validate the payload (pure, no
//! I/O), resolve and authorize the records it touches, perform the store
//! call, and wrap the outcome in the response envelope. Ownership is always
//! checked against the stored record and the bearer token, never against
//! ids claimed in the payload.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use create_endpoint::create_transaction;
pub use delete_endpoint::delete_transaction;
pub use edit_endpoint::edit_transaction;
pub use list_endpoint::get_transactions;
