//! The URI paths for the REST API.

/// The route for registering a new user.
pub const SIGN_UP: &str = "/auth/signup";
/// The route for logging in and obtaining a bearer token.
pub const LOG_IN: &str = "/auth/login";
/// The collection route for transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The collection route for accounts.
pub const ACCOUNTS: &str = "/accounts";
/// The route for a single account.
pub const ACCOUNT: &str = "/accounts/{account_id}";
