//! Shared helpers for the crate's tests: in-memory app states, fixture
//! users, deliberately failing stores and envelope parsing.

use std::sync::{Arc, Mutex};

use axum::{http::StatusCode, response::Response};
use rusqlite::Connection;

use crate::{
    AccountDeletion, AppState, Error, SqliteAppState,
    db::initialize,
    envelope::Envelope,
    models::{
        Account, AccountFields, AccountId, DatabaseId, PasswordHash, Transaction,
        TransactionFields, User, UserId,
    },
    stores::{
        AccountStore, TransactionStore, UserStore,
        sqlite::{SQLiteAccountStore, SQLiteTransactionStore, SQLiteUserStore},
    },
};

fn test_connection() -> Arc<Mutex<Connection>> {
    let connection =
        Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
    initialize(&connection).expect("Could not create tables");

    Arc::new(Mutex::new(connection))
}

/// An app state backed by a fresh in-memory database.
pub fn get_test_state() -> SqliteAppState {
    let connection = test_connection();

    AppState::new(
        SQLiteTransactionStore::new(connection.clone()),
        SQLiteAccountStore::new(connection.clone()),
        SQLiteUserStore::new(connection),
        "wowwhatasecret",
        AccountDeletion::Cascade,
    )
}

/// An app state whose transaction store fails every operation, for driving
/// the persistence failure branches of the transaction workflows.
pub fn get_failing_transaction_state()
-> AppState<FailingTransactionStore, SQLiteAccountStore, SQLiteUserStore> {
    let connection = test_connection();

    AppState::new(
        FailingTransactionStore,
        SQLiteAccountStore::new(connection.clone()),
        SQLiteUserStore::new(connection),
        "wowwhatasecret",
        AccountDeletion::Cascade,
    )
}

/// An app state whose account store fails every operation, for driving the
/// persistence failure branches of the account workflows.
pub fn get_failing_account_state()
-> AppState<SQLiteTransactionStore, FailingAccountStore, SQLiteUserStore> {
    let connection = test_connection();

    AppState::new(
        SQLiteTransactionStore::new(connection.clone()),
        FailingAccountStore,
        SQLiteUserStore::new(connection),
        "wowwhatasecret",
        AccountDeletion::Cascade,
    )
}

/// Register a fixture user directly through the store.
pub fn create_test_user(user_store: &impl UserStore, email: &str) -> User {
    user_store
        .create(email, PasswordHash::new("averagepassword").unwrap())
        .expect("Could not create test user")
}

fn failed() -> Error {
    Error::SqlError(rusqlite::Error::InvalidQuery)
}

/// A transaction store where every operation fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingTransactionStore;

impl TransactionStore for FailingTransactionStore {
    fn create(&self, _user_id: UserId, _fields: TransactionFields) -> Result<Transaction, Error> {
        Err(failed())
    }

    fn get(&self, _id: DatabaseId) -> Result<Transaction, Error> {
        Err(failed())
    }

    fn get_by_user(&self, _user_id: UserId) -> Result<Vec<Transaction>, Error> {
        Err(failed())
    }

    fn update(&self, _id: DatabaseId, _fields: TransactionFields) -> Result<(), Error> {
        Err(failed())
    }

    fn delete(&self, _id: DatabaseId) -> Result<(), Error> {
        Err(failed())
    }

    fn delete_by_account(&self, _account_id: AccountId) -> Result<usize, Error> {
        Err(failed())
    }

    fn count_by_account(&self, _account_id: AccountId) -> Result<usize, Error> {
        Err(failed())
    }
}

/// An account store where every operation fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingAccountStore;

impl AccountStore for FailingAccountStore {
    fn create(&self, _user_id: UserId, _fields: AccountFields) -> Result<Account, Error> {
        Err(failed())
    }

    fn get(&self, _id: AccountId) -> Result<Account, Error> {
        Err(failed())
    }

    fn get_by_user(&self, _user_id: UserId) -> Result<Vec<Account>, Error> {
        Err(failed())
    }

    fn update(&self, _id: AccountId, _fields: AccountFields) -> Result<(), Error> {
        Err(failed())
    }

    fn delete(&self, _id: AccountId) -> Result<(), Error> {
        Err(failed())
    }
}

/// Split a handler response into its status code and decoded envelope.
pub async fn parse_envelope(response: Response) -> (StatusCode, Envelope) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");
    let envelope = serde_json::from_slice(&body).expect("Could not parse response envelope");

    (status, envelope)
}
