//! Defines the endpoint for logging in with an email and password.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde_json::json;

use crate::{
    AppState, Error,
    auth::encode_token,
    envelope::{Envelope, error_code},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// The credentials supplied when logging in.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// The email address the user registered with.
    pub email: Option<String>,
    /// The raw password to check against the stored hash.
    pub password: Option<String>,
}

/// A route handler for logging in and issuing a bearer token.
///
/// A missing user and a wrong password produce the same response so the
/// endpoint does not reveal which emails are registered.
pub async fn log_in<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let email = credentials.email.as_deref().unwrap_or_default().trim();
    let password = credentials.password.as_deref().unwrap_or_default();

    let user = match state.user_store.get_by_email(email) {
        Ok(user) => user,
        Err(Error::NotFound) => return wrong_credentials(),
        Err(error) => {
            tracing::error!("could not look up user: {error}");
            return Envelope::failure("Unable to log in", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match user.password_hash().verify(password) {
        Ok(true) => {}
        Ok(false) => return wrong_credentials(),
        Err(error) => {
            tracing::error!("could not verify password: {error}");
            return Envelope::failure("Unable to log in", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    match encode_token(user.id(), &state.auth_keys.encoding) {
        Ok(token) => Envelope::success_with_values(
            "Logged in",
            json!({ "token": token, "userId": user.id() }),
        )
        .into_response_with(StatusCode::OK),
        Err(error) => {
            tracing::error!("could not sign token: {error}");
            Envelope::failure("Unable to log in", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn wrong_credentials() -> Response {
    Envelope::failure("Wrong credentials", error_code::REJECTED)
        .into_response_with(StatusCode::UNAUTHORIZED)
}
