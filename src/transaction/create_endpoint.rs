//! Defines the endpoint for creating a transaction.

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    AppState, Error,
    auth::{AuthenticatedUser, authorize_owner},
    envelope::{Envelope, error_code},
    models::{TransactionFields, TransactionPayload},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for creating a new transaction.
///
/// The owner of the new transaction is the authenticated requester; the
/// referenced account must exist and belong to the same user.
pub async fn create_transaction<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Json(payload): Json<TransactionPayload>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let fields = match TransactionFields::validate(&payload) {
        Ok(fields) => fields,
        Err(error) => {
            return Envelope::failure(error.to_string(), error_code::REJECTED)
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let account = match state.account_store.get(fields.account_id) {
        Ok(account) => account,
        Err(Error::NotFound) => {
            return Envelope::failure("Could not find account", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            tracing::error!("could not look up account: {error}");
            return Envelope::failure("Unable to create transaction", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if authorize_owner(requester, account.user_id).is_err() {
        return Envelope::failure("Not authorized", error_code::NOT_AUTHORIZED)
            .into_response_with(StatusCode::FORBIDDEN);
    }

    match state.transaction_store.create(requester, fields) {
        Ok(transaction) => match serde_json::to_value(&transaction) {
            Ok(values) => Envelope::success_with_values("Transaction created", values)
                .into_response_with(StatusCode::CREATED),
            Err(error) => {
                tracing::error!("could not serialize transaction: {error}");
                Envelope::failure("Unable to create transaction", error_code::MUTATION_FAILED)
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            Envelope::failure("Unable to create transaction", error_code::MUTATION_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State, http::StatusCode};

    use super::create_transaction;
    use crate::{
        auth::AuthenticatedUser,
        envelope::{ApiStatus, error_code},
        models::{AccountFields, TransactionPayload},
        stores::AccountStore,
        test_utils::{
            create_test_user, get_failing_transaction_state, get_test_state, parse_envelope,
        },
    };

    fn payload(account_id: i64) -> TransactionPayload {
        TransactionPayload {
            date: Some("02-25-2019".to_string()),
            account_name: Some(account_id.to_string()),
            description: Some("groceries".to_string()),
            category_parent: Some("Food".to_string()),
            category_child: Some("Supermarket".to_string()),
            amount: Some("10.00".to_string()),
            transaction_type: Some("debit".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn creates_transaction_for_requester() {
        let state = get_test_state();
        let user = create_test_user(&state.user_store, "test@example.com");
        let account = state
            .account_store
            .create(
                user.id(),
                AccountFields {
                    name: "Checking".to_string(),
                },
            )
            .unwrap();

        let response = create_transaction(
            State(state),
            AuthenticatedUser(user.id()),
            Json(payload(account.id)),
        )
        .await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(envelope.api_status, ApiStatus::Success);
        assert_eq!(envelope.api_message, "Transaction created");
        let values = envelope.values.unwrap();
        assert_eq!(values["userId"], user.id().as_i64());
        assert_eq!(values["amount"], "10.00");
    }

    #[tokio::test]
    async fn claimed_user_id_in_payload_is_ignored() {
        let state = get_test_state();
        let owner = create_test_user(&state.user_store, "owner@example.com");
        let other = create_test_user(&state.user_store, "other@example.com");
        let account = state
            .account_store
            .create(
                owner.id(),
                AccountFields {
                    name: "Checking".to_string(),
                },
            )
            .unwrap();

        let mut request = payload(account.id);
        request.user_id = Some(other.id());

        let response =
            create_transaction(State(state), AuthenticatedUser(owner.id()), Json(request)).await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(envelope.values.unwrap()["userId"], owner.id().as_i64());
    }

    #[tokio::test]
    async fn rejects_invalid_payload() {
        let state = get_test_state();
        let user = create_test_user(&state.user_store, "test@example.com");

        let mut request = payload(1);
        request.amount = None;

        let response =
            create_transaction(State(state), AuthenticatedUser(user.id()), Json(request)).await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.error_code, error_code::REJECTED);
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let state = get_test_state();
        let user = create_test_user(&state.user_store, "test@example.com");

        let response =
            create_transaction(State(state), AuthenticatedUser(user.id()), Json(payload(999)))
                .await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error_code, error_code::NOT_FOUND);
        assert_eq!(envelope.api_message, "Could not find account");
    }

    #[tokio::test]
    async fn rejects_account_owned_by_other_user() {
        let state = get_test_state();
        let owner = create_test_user(&state.user_store, "owner@example.com");
        let other = create_test_user(&state.user_store, "other@example.com");
        let account = state
            .account_store
            .create(
                owner.id(),
                AccountFields {
                    name: "Checking".to_string(),
                },
            )
            .unwrap();

        let response = create_transaction(
            State(state),
            AuthenticatedUser(other.id()),
            Json(payload(account.id)),
        )
        .await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(envelope.error_code, error_code::NOT_AUTHORIZED);
        assert_eq!(envelope.api_message, "Not authorized");
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let state = get_failing_transaction_state();
        let user = create_test_user(&state.user_store, "test@example.com");
        let account = state
            .account_store
            .create(
                user.id(),
                AccountFields {
                    name: "Checking".to_string(),
                },
            )
            .unwrap();

        let response = create_transaction(
            State(state),
            AuthenticatedUser(user.id()),
            Json(payload(account.id)),
        )
        .await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error_code, error_code::MUTATION_FAILED);
        assert_eq!(envelope.api_message, "Unable to create transaction");
    }
}
