//! Defines the endpoint for editing an existing transaction.

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    AppState, Error,
    auth::{AuthenticatedUser, authorize_owner},
    envelope::{Envelope, error_code},
    models::{TransactionFields, TransactionPayload},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for editing a transaction.
///
/// The transaction to edit travels in the body as `_id`. Authorization is
/// checked against the stored record before any field is touched, and the
/// replacement account reference is resolved and authorized again so an edit
/// cannot move a transaction onto another user's account. A transaction that
/// exists but belongs to someone else stays a 403, never a 404.
pub async fn edit_transaction<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<TransactionPayload>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let Some(id) = payload.id else {
        return Envelope::failure(
            Error::MissingField("_id").to_string(),
            error_code::REJECTED,
        )
        .into_response_with(StatusCode::BAD_REQUEST);
    };

    let fields = match TransactionFields::validate(&payload) {
        Ok(fields) => fields,
        Err(error) => {
            return Envelope::failure(error.to_string(), error_code::REJECTED)
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let stored = match state.transaction_store.get(id) {
        Ok(transaction) => transaction,
        Err(Error::NotFound) => {
            return Envelope::failure("Could not find transaction", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            tracing::error!("could not look up transaction: {error}");
            return unable_to_edit();
        }
    };

    if authorize_owner(requester, stored.user_id).is_err() {
        return not_authorized();
    }

    let account = match state.account_store.get(fields.account_id) {
        Ok(account) => account,
        Err(Error::NotFound) => {
            return Envelope::failure("Could not find account", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            tracing::error!("could not look up account: {error}");
            return unable_to_edit();
        }
    };

    if authorize_owner(requester, account.user_id).is_err() {
        return not_authorized();
    }

    match state.transaction_store.update(id, fields) {
        Ok(()) => Envelope::success("Transaction updated").into_response_with(StatusCode::OK),
        Err(Error::NotFound) => {
            Envelope::failure("Could not find transaction", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Err(error) => {
            tracing::error!("could not update transaction: {error}");
            unable_to_edit()
        }
    }
}

fn not_authorized() -> Response {
    Envelope::failure("Not authorized", error_code::NOT_AUTHORIZED)
        .into_response_with(StatusCode::FORBIDDEN)
}

fn unable_to_edit() -> Response {
    Envelope::failure("Unable to edit transaction", error_code::MUTATION_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
