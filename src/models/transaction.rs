//! Defines the transaction model, the core record of the application, and
//! the validation that turns an untrusted transaction payload into typed
//! fields.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    models::{AccountId, Amount, DatabaseId, UserId},
};

/// The wire format for transaction dates: month-day-year, e.g. `02-25-2019`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[month]-[day]-[year]");

/// Parse a month-day-year date string such as `"02-25-2019"`.
///
/// # Errors
/// Returns [Error::InvalidDate] if the text is not a valid calendar date in
/// that format.
pub fn parse_transaction_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Serde adapter for the `MM-DD-YYYY` wire format, for use with
/// `#[serde(with = "mdy_date")]`.
pub mod mdy_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    use super::DATE_FORMAT;

    /// Serialize `date` as an `MM-DD-YYYY` string.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date.format(DATE_FORMAT).map_err(ser::Error::custom)?;

        serializer.serialize_str(&formatted)
    }

    /// Deserialize an `MM-DD-YYYY` string into a [Date].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;

        Date::parse(&text, DATE_FORMAT).map_err(de::Error::custom)
    }
}

/// Whether a transaction took money out of an account or put money into it.
///
/// The direction of a transaction is carried here, never by the sign of its
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money leaving the account.
    Debit,
    /// Money entering the account.
    Credit,
}

impl TransactionType {
    /// Parse a transaction type from its wire name.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransactionType] for anything other than
    /// `"debit"` or `"credit"`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        match text {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            other => Err(Error::InvalidTransactionType(other.to_string())),
        }
    }

    /// The wire name of the transaction type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single financial event: money spent from or received into an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    #[serde(rename = "_id")]
    pub id: DatabaseId,
    /// The ID of the user that owns this transaction.
    pub user_id: UserId,
    /// The ID of the account this transaction belongs to.
    ///
    /// The wire name is `accountName` for compatibility with existing
    /// clients, which have always sent the account's id under that key.
    #[serde(rename = "accountName")]
    pub account_id: AccountId,
    /// The calendar date the transaction happened on.
    #[serde(with = "mdy_date")]
    pub date: Date,
    /// Text detailing the transaction.
    pub description: String,
    /// The top level category label, e.g. "Food".
    pub category_parent: String,
    /// The subcategory label, e.g. "Restaurants".
    pub category_child: String,
    /// The value of the transaction. Always non-negative, see
    /// [TransactionType].
    pub amount: Amount,
    /// Whether the transaction is a debit or a credit.
    pub transaction_type: TransactionType,
    /// A free-form note. Empty string when the client supplied none.
    pub note: String,
}

/// The raw, untrusted field set of a create or edit transaction request.
///
/// All fields are optional strings so that missing and malformed values can
/// be rejected through the envelope rather than a deserialization fault. The
/// claimed `userId` is accepted for compatibility but never trusted: the
/// owner of a new transaction is the authenticated requester, and edits are
/// authorized against the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionPayload {
    /// The ID of the transaction to edit. Ignored when creating.
    #[serde(rename = "_id")]
    pub id: Option<DatabaseId>,
    /// The transaction date, in `MM-DD-YYYY` format.
    pub date: Option<String>,
    /// The id of the account the transaction belongs to.
    pub account_name: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The top level category label.
    pub category_parent: Option<String>,
    /// The subcategory label.
    pub category_child: Option<String>,
    /// The transaction value as a decimal string.
    pub amount: Option<String>,
    /// `"debit"` or `"credit"`.
    pub transaction_type: Option<String>,
    /// A free-form note. Defaults to the empty string.
    pub note: Option<String>,
    /// Claimed owner. See the type level docs: never trusted.
    pub user_id: Option<UserId>,
}

/// The validated and normalized fields of a transaction payload.
///
/// This is everything needed to persist a transaction except its id and
/// owner, which the workflow supplies from the URL/stored record and the
/// authenticated requester respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    /// The calendar date the transaction happened on.
    pub date: Date,
    /// The ID of the referenced account.
    pub account_id: AccountId,
    /// Text detailing the transaction, trimmed.
    pub description: String,
    /// The top level category label, trimmed.
    pub category_parent: String,
    /// The subcategory label, trimmed.
    pub category_child: String,
    /// The canonicalized transaction value.
    pub amount: Amount,
    /// Whether the transaction is a debit or a credit.
    pub transaction_type: TransactionType,
    /// A free-form note, trimmed. Empty string when absent.
    pub note: String,
}

impl TransactionFields {
    /// Validate and normalize an untrusted payload. Pure, no I/O.
    ///
    /// Every required field must be present and non-empty after trimming;
    /// only `note` may be absent, in which case it defaults to the empty
    /// string.
    ///
    /// # Errors
    /// Returns the first applicable of [Error::MissingField],
    /// [Error::InvalidDate], [Error::InvalidAccountReference],
    /// [Error::InvalidAmount] or [Error::InvalidTransactionType].
    pub fn validate(payload: &TransactionPayload) -> Result<Self, Error> {
        let date_text = required(&payload.date, "date")?;
        let account_text = required(&payload.account_name, "accountName")?;
        let description = required(&payload.description, "description")?;
        let category_parent = required(&payload.category_parent, "categoryParent")?;
        let category_child = required(&payload.category_child, "categoryChild")?;
        let amount_text = required(&payload.amount, "amount")?;
        let type_text = required(&payload.transaction_type, "transactionType")?;

        let date = parse_transaction_date(date_text)?;
        let account_id = account_text
            .parse()
            .map_err(|_| Error::InvalidAccountReference(account_text.to_string()))?;
        let amount = Amount::parse(amount_text)?;
        let transaction_type = TransactionType::parse(type_text)?;
        let note = payload
            .note
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            date,
            account_id,
            description: description.to_string(),
            category_parent: category_parent.to_string(),
            category_child: category_child.to_string(),
            amount,
            transaction_type,
            note,
        })
    }

    /// Combine the fields with an id and owner into a full record.
    pub fn into_transaction(self, id: DatabaseId, user_id: UserId) -> Transaction {
        Transaction {
            id,
            user_id,
            account_id: self.account_id,
            date: self.date,
            description: self.description,
            category_parent: self.category_parent,
            category_child: self.category_child,
            amount: self.amount,
            transaction_type: self.transaction_type,
            note: self.note,
        }
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, Error> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingField(name)),
    }
}

#[cfg(test)]
mod date_tests {
    use time::macros::date;

    use super::parse_transaction_date;
    use crate::Error;

    #[test]
    fn parses_month_day_year() {
        assert_eq!(parse_transaction_date("02-25-2019"), Ok(date!(2019 - 02 - 25)));
    }

    #[test]
    fn rejects_day_month_year_order() {
        // The 25th month does not exist.
        assert_eq!(
            parse_transaction_date("25-02-2019"),
            Err(Error::InvalidDate("25-02-2019".to_string()))
        );
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        assert!(parse_transaction_date("02-30-2019").is_err());
        assert!(parse_transaction_date("2019-02-25").is_err());
        assert!(parse_transaction_date("not a date").is_err());
    }
}
