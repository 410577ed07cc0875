//! Defines the endpoint for listing the requester's accounts.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    AppState,
    auth::AuthenticatedUser,
    envelope::{Envelope, error_code},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for listing every account owned by the requester.
pub async fn get_accounts<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    match state.account_store.get_by_user(requester) {
        Ok(accounts) => match serde_json::to_value(&accounts) {
            Ok(values) => Envelope::success_with_values("Accounts retrieved", values)
                .into_response_with(StatusCode::OK),
            Err(error) => {
                tracing::error!("could not serialize accounts: {error}");
                unable_to_retrieve()
            }
        },
        Err(error) => {
            tracing::error!("could not retrieve accounts: {error}");
            unable_to_retrieve()
        }
    }
}

fn unable_to_retrieve() -> Response {
    Envelope::failure("Unable to retrieve accounts", error_code::RETRIEVAL_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
