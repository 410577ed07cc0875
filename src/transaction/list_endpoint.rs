//! Defines the endpoint for listing the requester's transactions.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    AppState,
    auth::AuthenticatedUser,
    envelope::{Envelope, error_code},
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for listing every transaction owned by the requester.
///
/// The list is scoped by the bearer token alone, so a user can never see
/// another user's records. An empty list is a success, not an error.
pub async fn get_transactions<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    match state.transaction_store.get_by_user(requester) {
        Ok(transactions) => match serde_json::to_value(&transactions) {
            Ok(values) => Envelope::success_with_values("Transactions retrieved", values)
                .into_response_with(StatusCode::OK),
            Err(error) => {
                tracing::error!("could not serialize transactions: {error}");
                Envelope::failure("Unable to retrieve transactions", error_code::RETRIEVAL_FAILED)
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(error) => {
            tracing::error!("could not retrieve transactions: {error}");
            Envelope::failure("Unable to retrieve transactions", error_code::RETRIEVAL_FAILED)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};

    use super::get_transactions;
    use crate::{
        auth::AuthenticatedUser,
        envelope::{ApiStatus, error_code},
        models::{AccountFields, TransactionFields, parse_transaction_date},
        stores::{AccountStore, TransactionStore},
        test_utils::{
            create_test_user, get_failing_transaction_state, get_test_state, parse_envelope,
        },
    };

    fn fields(account_id: i64, description: &str) -> TransactionFields {
        TransactionFields {
            date: parse_transaction_date("02-25-2019").unwrap(),
            account_id,
            description: description.to_string(),
            category_parent: "Food".to_string(),
            category_child: "Supermarket".to_string(),
            amount: "10.00".parse().unwrap(),
            transaction_type: crate::models::TransactionType::Debit,
            note: String::new(),
        }
    }

    #[tokio::test]
    async fn lists_only_requesters_transactions_in_insertion_order() {
        let state = get_test_state();
        let user = create_test_user(&state.user_store, "test@example.com");
        let other = create_test_user(&state.user_store, "other@example.com");
        let account = state
            .account_store
            .create(
                user.id(),
                AccountFields {
                    name: "Checking".to_string(),
                },
            )
            .unwrap();
        let other_account = state
            .account_store
            .create(
                other.id(),
                AccountFields {
                    name: "Savings".to_string(),
                },
            )
            .unwrap();
        state
            .transaction_store
            .create(user.id(), fields(account.id, "first"))
            .unwrap();
        state
            .transaction_store
            .create(other.id(), fields(other_account.id, "not mine"))
            .unwrap();
        state
            .transaction_store
            .create(user.id(), fields(account.id, "second"))
            .unwrap();

        let response = get_transactions(State(state), AuthenticatedUser(user.id())).await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.api_message, "Transactions retrieved");
        let values = envelope.values.unwrap();
        let descriptions: Vec<_> = values
            .as_array()
            .unwrap()
            .iter()
            .map(|record| record["description"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(descriptions, ["first", "second"]);
    }

    #[tokio::test]
    async fn empty_list_is_success() {
        let state = get_test_state();
        let user = create_test_user(&state.user_store, "test@example.com");

        let response = get_transactions(State(state), AuthenticatedUser(user.id())).await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.api_status, ApiStatus::Success);
        assert_eq!(envelope.values.unwrap(), serde_json::json!([]));
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let state = get_failing_transaction_state();
        let user = create_test_user(&state.user_store, "test@example.com");

        let response = get_transactions(State(state), AuthenticatedUser(user.id())).await;

        let (status, envelope) = parse_envelope(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error_code, error_code::RETRIEVAL_FAILED);
        assert_eq!(envelope.api_message, "Unable to retrieve transactions");
    }
}
