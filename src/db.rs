//! Sets up the application's database schema.

use rusqlite::Connection;

use crate::stores::sqlite::{create_account_table, create_transaction_table, create_user_table};

/// Create the application's tables if they do not exist.
///
/// Must be called once on the connection before any store is used.
///
/// # Errors
/// Returns an error if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    create_user_table(connection)?;
    create_account_table(connection)?;
    create_transaction_table(connection)?;

    Ok(())
}
