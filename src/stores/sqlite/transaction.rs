//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};
use time::Date;

use crate::{
    Error,
    models::{
        AccountId, Amount, DATE_FORMAT, DatabaseId, Transaction, TransactionFields,
        TransactionType, UserId, parse_transaction_date,
    },
    stores::TransactionStore,
};

/// Create the table that backs [SQLiteTransactionStore].
///
/// The [user](super::create_user_table) and
/// [account](super::create_account_table) tables must be created first.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            account_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL,
            category_parent TEXT NOT NULL,
            category_child TEXT NOT NULL,
            amount TEXT NOT NULL,
            transaction_type TEXT NOT NULL,
            note TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id),
            FOREIGN KEY(account_id) REFERENCES account(id)
        )",
        (),
    )?;

    Ok(())
}

const COLUMNS: &str = "id, user_id, account_id, date, description, category_parent, \
                       category_child, amount, transaction_type, note";

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let date_text: String = row.get(3)?;
    let date = parse_transaction_date(&date_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error)))?;

    let amount_text: String = row.get(7)?;
    let amount = Amount::parse(&amount_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(error)))?;

    let type_text: String = row.get(8)?;
    let transaction_type = TransactionType::parse(&type_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(error)))?;

    Ok(Transaction {
        id: row.get(0)?,
        user_id: UserId::new(row.get(1)?),
        account_id: row.get(2)?,
        date,
        description: row.get(4)?,
        category_parent: row.get(5)?,
        category_child: row.get(6)?,
        amount,
        transaction_type,
        note: row.get(9)?,
    })
}

fn date_to_sql(date: Date) -> Result<String, Error> {
    date.format(DATE_FORMAT)
        .map_err(|error| Error::InvalidDate(error.to_string()))
}

/// Stores transactions in a SQLite database.
///
/// Dates are stored as `MM-DD-YYYY` text and amounts as their canonical
/// two-decimal string, so a record reads back exactly as it is served.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn create(&self, user_id: UserId, fields: TransactionFields) -> Result<Transaction, Error> {
        let date = date_to_sql(fields.date)?;

        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "INSERT INTO \"transaction\" (user_id, account_id, date, description, \
                 category_parent, category_child, amount, transaction_type, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 RETURNING {COLUMNS}",
            ))?
            .query_row(
                (
                    user_id.as_i64(),
                    fields.account_id,
                    date,
                    fields.description,
                    fields.category_parent,
                    fields.category_child,
                    fields.amount.to_string(),
                    fields.transaction_type.as_str(),
                    fields.note,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    fn get(&self, id: DatabaseId) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {COLUMNS} FROM \"transaction\" WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    fn get_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, Error> {
        // Insertion order: the deliberate default, there is no pagination or
        // sorting in this API.
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {COLUMNS} FROM \"transaction\" WHERE user_id = :user_id ORDER BY id ASC"
            ))?
            .query_map(&[(":user_id", &user_id.as_i64())], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn update(&self, id: DatabaseId, fields: TransactionFields) -> Result<(), Error> {
        let date = date_to_sql(fields.date)?;

        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE \"transaction\"
             SET account_id = ?1, date = ?2, description = ?3, category_parent = ?4, \
                 category_child = ?5, amount = ?6, transaction_type = ?7, note = ?8
             WHERE id = ?9",
            (
                fields.account_id,
                date,
                fields.description,
                fields.category_parent,
                fields.category_child,
                fields.amount.to_string(),
                fields.transaction_type.as_str(),
                fields.note,
                id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn delete(&self, id: DatabaseId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn delete_by_account(&self, account_id: AccountId) -> Result<usize, Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute(
                "DELETE FROM \"transaction\" WHERE account_id = ?1",
                [account_id],
            )?;

        Ok(rows_affected)
    }

    fn count_by_account(&self, account_id: AccountId) -> Result<usize, Error> {
        let count: i64 = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT COUNT(*) FROM \"transaction\" WHERE account_id = :account_id")?
            .query_row(&[(":account_id", &account_id)], |row| row.get(0))?;

        Ok(count as usize)
    }
}
