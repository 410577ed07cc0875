//! The uniform JSON response envelope returned by every API operation.
//!
//! Every handler resolves to the same shape:
//! `{ apiStatus, apiMessage, errorCode, values? }`. The numeric error codes
//! disambiguate the failure category within a single HTTP status class and
//! are part of the client contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The numeric `errorCode` taxonomy.
///
/// Codes 0 through 4 must not be renumbered, clients rely on them.
pub mod error_code {
    /// The operation completed.
    pub const SUCCESS: i32 = 0;
    /// A list retrieval failed at the persistence layer.
    pub const RETRIEVAL_FAILED: i32 = 1;
    /// The requested resource does not exist.
    pub const NOT_FOUND: i32 = 2;
    /// The requester does not own the resource.
    pub const NOT_AUTHORIZED: i32 = 3;
    /// A create, edit or delete failed at the persistence layer.
    pub const MUTATION_FAILED: i32 = 4;
    /// The request was rejected before any persistence I/O, either by field
    /// validation or because the bearer token was missing or invalid.
    pub const REJECTED: i32 = 5;
    /// The operation conflicts with existing records: registering an email
    /// that is already taken, or deleting an account that still has
    /// transactions under the restrict policy.
    pub const CONFLICT: i32 = 6;
}

/// Whether the operation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    /// The operation completed and `errorCode` is zero.
    Success,
    /// The operation failed and `errorCode` holds the failure category.
    Failure,
}

/// The response body shared by every endpoint.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Overall outcome of the operation.
    pub api_status: ApiStatus,
    /// A human readable description of the outcome.
    pub api_message: String,
    /// One of the [error_code] constants.
    pub error_code: i32,
    /// The records produced by the operation, when it produces any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
}

impl Envelope {
    /// An envelope for an operation that succeeded without returning records.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            api_status: ApiStatus::Success,
            api_message: message.into(),
            error_code: error_code::SUCCESS,
            values: None,
        }
    }

    /// An envelope for an operation that succeeded and returns records in
    /// `values`.
    pub fn success_with_values(message: impl Into<String>, values: serde_json::Value) -> Self {
        Self {
            api_status: ApiStatus::Success,
            api_message: message.into(),
            error_code: error_code::SUCCESS,
            values: Some(values),
        }
    }

    /// An envelope for a failed operation. `values` is always absent on
    /// failure.
    pub fn failure(message: impl Into<String>, error_code: i32) -> Self {
        Self {
            api_status: ApiStatus::Failure,
            api_message: message.into(),
            error_code,
            values: None,
        }
    }

    /// Convert the envelope into an HTTP response with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
