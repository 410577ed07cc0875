//! Defines the app level error type.
use crate::models::UserId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was absent from a request payload, or contained only
    /// whitespace.
    ///
    /// The field name is the wire name, e.g. `categoryParent`.
    #[error("a required field is missing or empty: {0}")]
    MissingField(&'static str),

    /// An amount string could not be parsed as a non-negative decimal with at
    /// most two fractional digits.
    ///
    /// The sign of a transaction is carried by its transaction type, so
    /// negative amounts are always rejected.
    #[error("{0:?} is not a non-negative amount with at most two decimal places")]
    InvalidAmount(String),

    /// A date string could not be parsed as a month-day-year calendar date.
    #[error("{0:?} is not a valid MM-DD-YYYY date")]
    InvalidDate(String),

    /// A transaction type other than "debit" or "credit" was supplied.
    #[error("{0:?} is not one of \"debit\" or \"credit\"")]
    InvalidTransactionType(String),

    /// The account reference in a transaction payload was not a valid account
    /// id.
    #[error("{0:?} does not refer to a valid account")]
    InvalidAccountReference(String),

    /// An email address that is not plausibly an email address was used to
    /// register a user.
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    /// The email address used to register a user already exists.
    #[error("the email address is already registered")]
    DuplicateEmail,

    /// The user provided an email and password combination that does not
    /// match a registered user.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An unexpected error occurred in the underlying hashing library.
    ///
    /// The error string should only be logged on the server, never sent to
    /// the client.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The requested resource was not found.
    ///
    /// The client should check that the parameters (e.g., ID) are correct and
    /// that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The authenticated requester does not own the resource it tried to
    /// read or mutate.
    ///
    /// This is always reported distinctly from [Error::NotFound].
    #[error("user {0} does not own this resource")]
    NotAuthorized(UserId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}
