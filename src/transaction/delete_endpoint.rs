//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AppState, Error,
    auth::{AuthenticatedUser, authorize_owner},
    envelope::{Envelope, error_code},
    models::DatabaseId,
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for deleting a transaction.
///
/// The stored record is fetched and authorized first: deleting someone
/// else's transaction is a 403, and deleting an already deleted one is a
/// 404, so repeating a delete is never mistaken for success.
pub async fn delete_transaction<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(transaction_id): Path<DatabaseId>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let stored = match state.transaction_store.get(transaction_id) {
        Ok(transaction) => transaction,
        Err(Error::NotFound) => {
            return Envelope::failure("Could not find transaction", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            tracing::error!("could not look up transaction: {error}");
            return unable_to_delete();
        }
    };

    if authorize_owner(requester, stored.user_id).is_err() {
        return Envelope::failure("Not authorized", error_code::NOT_AUTHORIZED)
            .into_response_with(StatusCode::FORBIDDEN);
    }

    match state.transaction_store.delete(transaction_id) {
        Ok(()) => Envelope::success("Transaction deleted").into_response_with(StatusCode::OK),
        Err(Error::NotFound) => {
            Envelope::failure("Could not find transaction", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Err(error) => {
            tracing::error!("could not delete transaction: {error}");
            unable_to_delete()
        }
    }
}

fn unable_to_delete() -> Response {
    Envelope::failure("Unable to delete transaction", error_code::MUTATION_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
