//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).
//!
//! The traits are the persistence boundary of the application: the endpoint
//! workflows only ever talk to these, so any backend that can satisfy them
//! (the shipped SQLite store, an in-memory fake in tests) can sit behind the
//! API unchanged.

mod account;
mod transaction;
mod user;

pub mod sqlite;

pub use account::AccountStore;
pub use transaction::TransactionStore;
pub use user::UserStore;
