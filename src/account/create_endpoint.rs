//! Defines the endpoint for creating an account.

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    AppState,
    auth::AuthenticatedUser,
    envelope::{Envelope, error_code},
    models::{AccountFields, AccountPayload},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for creating a new account owned by the requester.
pub async fn create_account<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<AccountPayload>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let fields = match AccountFields::validate(&payload) {
        Ok(fields) => fields,
        Err(error) => {
            return Envelope::failure(error.to_string(), error_code::REJECTED)
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    match state.account_store.create(requester, fields) {
        Ok(account) => match serde_json::to_value(&account) {
            Ok(values) => Envelope::success_with_values("Account created", values)
                .into_response_with(StatusCode::CREATED),
            Err(error) => {
                tracing::error!("could not serialize account: {error}");
                unable_to_create()
            }
        },
        Err(error) => {
            tracing::error!("could not create account: {error}");
            unable_to_create()
        }
    }
}

fn unable_to_create() -> Response {
    Envelope::failure("Unable to create account", error_code::MUTATION_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
