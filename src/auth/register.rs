//! Defines the endpoint for registering a new user.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde_json::json;

use crate::{
    AppState, Error,
    envelope::{Envelope, error_code},
    models::{PasswordHash, validate_email},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// The credentials supplied when registering.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct RegistrationPayload {
    /// The email address to register with.
    pub email: Option<String>,
    /// The raw password. Hashed here at the boundary, never stored.
    pub password: Option<String>,
}

/// A route handler for registering a new user.
pub async fn register_user<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    Json(payload): Json<RegistrationPayload>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let email = match validate_email(payload.email.as_deref().unwrap_or_default()) {
        Ok(email) => email,
        Err(error) => {
            return Envelope::failure(error.to_string(), error_code::REJECTED)
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let password_hash = match PasswordHash::new(payload.password.as_deref().unwrap_or_default()) {
        Ok(password_hash) => password_hash,
        Err(Error::InvalidCredentials) => {
            return Envelope::failure(
                "Password must be at least 8 characters",
                error_code::REJECTED,
            )
            .into_response_with(StatusCode::BAD_REQUEST);
        }
        Err(error) => {
            tracing::error!("could not hash password: {error}");
            return Envelope::failure("Unable to create user", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match state.user_store.create(email, password_hash) {
        Ok(user) => {
            Envelope::success_with_values("User created", json!({ "userId": user.id() }))
                .into_response_with(StatusCode::CREATED)
        }
        Err(Error::DuplicateEmail) => {
            Envelope::failure("Email already registered", error_code::CONFLICT)
                .into_response_with(StatusCode::CONFLICT)
        }
        Err(error) => {
            tracing::error!("could not create user: {error}");
            Envelope::failure("Unable to create user", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
