//! Implements a SQLite backed user store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{PasswordHash, User, UserId},
    stores::UserStore,
};

/// Create the table that backs [SQLiteUserStore].
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let id = UserId::new(row.get(0)?);
    let email: String = row.get(1)?;
    let password_hash = PasswordHash::from_hash(row.get(2)?);

    Ok(User::new(id, email, password_hash))
}

/// Stores users in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    fn create(&self, email: &str, password_hash: PasswordHash) -> Result<User, Error> {
        let user = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO user (email, password_hash)
                 VALUES (?1, ?2)
                 RETURNING id, email, password_hash",
            )?
            .query_row((email, password_hash.as_str()), map_user_row)?;

        Ok(user)
    }

    fn get_by_id(&self, id: UserId) -> Result<User, Error> {
        let user = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, email, password_hash FROM user WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], map_user_row)?;

        Ok(user)
    }

    fn get_by_email(&self, email: &str) -> Result<User, Error> {
        let user = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, email, password_hash FROM user WHERE email = :email")?
            .query_row(&[(":email", &email)], map_user_row)?;

        Ok(user)
    }
}
