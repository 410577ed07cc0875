//! Implements a SQLite backed account store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{Account, AccountFields, AccountId, UserId},
    stores::AccountStore,
};

/// Create the table that backs [SQLiteAccountStore].
///
/// The [user](super::create_user_table) table must be created first.
pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id)
        )",
        (),
    )?;

    Ok(())
}

fn map_account_row(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        user_id: UserId::new(row.get(1)?),
        name: row.get(2)?,
    })
}

/// Stores accounts in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteAccountStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteAccountStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl AccountStore for SQLiteAccountStore {
    fn create(&self, user_id: UserId, fields: AccountFields) -> Result<Account, Error> {
        let account = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO account (user_id, name)
                 VALUES (?1, ?2)
                 RETURNING id, user_id, name",
            )?
            .query_row((user_id.as_i64(), fields.name), map_account_row)?;

        Ok(account)
    }

    fn get(&self, id: AccountId) -> Result<Account, Error> {
        let account = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, user_id, name FROM account WHERE id = :id")?
            .query_row(&[(":id", &id)], map_account_row)?;

        Ok(account)
    }

    fn get_by_user(&self, user_id: UserId) -> Result<Vec<Account>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, user_id, name FROM account WHERE user_id = :user_id")?
            .query_map(&[(":user_id", &user_id.as_i64())], map_account_row)?
            .map(|maybe_account| maybe_account.map_err(Error::from))
            .collect()
    }

    fn update(&self, id: AccountId, fields: AccountFields) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute(
                "UPDATE account SET name = ?1 WHERE id = ?2",
                (fields.name, id),
            )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn delete(&self, id: AccountId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM account WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
