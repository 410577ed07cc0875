//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::stores::{
    AccountStore, TransactionStore, UserStore,
    sqlite::{SQLiteAccountStore, SQLiteTransactionStore, SQLiteUserStore},
};

/// The keys used for signing and verifying bearer tokens.
#[derive(Clone)]
pub struct AuthKeys {
    /// The key for signing newly issued tokens.
    pub encoding: EncodingKey,
    /// The key for verifying tokens on incoming requests.
    pub decoding: DecodingKey,
}

impl AuthKeys {
    /// Derive both keys from a shared `secret` string.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

/// What happens to an account's transactions when the account is deleted.
///
/// This is an explicit configuration choice, not an accident of the storage
/// layer: the stores themselves never cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AccountDeletion {
    /// Delete the account's transactions along with the account.
    #[default]
    Cascade,
    /// Refuse to delete an account while transactions still reference it.
    Restrict,
}

/// The state of the REST server.
///
/// Generic over the store traits so that tests can swap in in-memory or
/// failing stores; the server binary uses [SqliteAppState].
#[derive(Clone)]
pub struct AppState<T, A, U>
where
    T: TransactionStore + Clone + Send + Sync,
    A: AccountStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// The store for managing [transactions](crate::models::Transaction).
    pub transaction_store: T,
    /// The store for managing [accounts](crate::models::Account).
    pub account_store: A,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
    /// The keys for signing and verifying bearer tokens.
    pub auth_keys: AuthKeys,
    /// The configured behavior for deleting accounts with transactions.
    pub account_deletion: AccountDeletion,
}

/// The app state wired to the SQLite stores, as used by the server binary.
pub type SqliteAppState = AppState<SQLiteTransactionStore, SQLiteAccountStore, SQLiteUserStore>;

impl<T, A, U> AppState<T, A, U>
where
    T: TransactionStore + Clone + Send + Sync,
    A: AccountStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// `secret` is the shared secret for signing bearer tokens.
    pub fn new(
        transaction_store: T,
        account_store: A,
        user_store: U,
        secret: &str,
        account_deletion: AccountDeletion,
    ) -> Self {
        Self {
            transaction_store,
            account_store,
            user_store,
            auth_keys: AuthKeys::new(secret),
            account_deletion,
        }
    }
}

// This impl lets the bearer token extractor get the keys from any state that
// embeds them.
impl<T, A, U> FromRef<AppState<T, A, U>> for AuthKeys
where
    T: TransactionStore + Clone + Send + Sync,
    A: AccountStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T, A, U>) -> Self {
        state.auth_keys.clone()
    }
}
