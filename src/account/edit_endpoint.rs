//! Defines the endpoint for renaming an account.

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    AppState, Error,
    auth::{AuthenticatedUser, authorize_owner},
    envelope::{Envelope, error_code},
    models::{AccountFields, AccountPayload},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for renaming an account.
///
/// The account to edit travels in the body as `_id`. The owner of the
/// account never changes.
pub async fn edit_account<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<AccountPayload>,
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

    let fields = match AccountFields::validate(&payload) {
        Ok(fields) => fields,
        Err(error) => {
            return Envelope::failure(error.to_string(), error_code::REJECTED)
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let stored = match state.account_store.get(id) {
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

    if authorize_owner(requester, stored.user_id).is_err() {
        return Envelope::failure("Not authorized", error_code::NOT_AUTHORIZED)
            .into_response_with(StatusCode::FORBIDDEN);
    }

    match state.account_store.update(id, fields) {
        Ok(()) => Envelope::success("Account updated").into_response_with(StatusCode::OK),
        Err(Error::NotFound) => {
            Envelope::failure("Could not find account", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Err(error) => {
            tracing::error!("could not update account: {error}");
            unable_to_edit()
        }
    }
}

fn unable_to_edit() -> Response {
    Envelope::failure("Unable to edit account", error_code::MUTATION_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
