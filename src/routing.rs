//! Assembles the REST API router.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    account::{create_account, delete_account, edit_account, get_accounts},
    auth::{log_in, register_user},
    endpoints,
    stores::{AccountStore, TransactionStore, UserStore},
    transaction::{create_transaction, delete_transaction, edit_transaction, get_transactions},
};

/// Build the API router on top of `state`.
///
/// The auth routes are the only ones reachable without a bearer token;
/// every other handler extracts the requester from the `Authorization`
/// header before touching a store.
pub fn build_router<T, A, U>(state: AppState<T, A, U>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::SIGN_UP, post(register_user::<T, A, U>))
        .route(endpoints::LOG_IN, post(log_in::<T, A, U>))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions::<T, A, U>)
                .post(create_transaction::<T, A, U>)
                .put(edit_transaction::<T, A, U>),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction::<T, A, U>))
        .route(
            endpoints::ACCOUNTS,
            get(get_accounts::<T, A, U>)
                .post(create_account::<T, A, U>)
                .put(edit_account::<T, A, U>),
        )
        .route(endpoints::ACCOUNT, delete(delete_account::<T, A, U>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::build_router;
    use crate::{endpoints, test_utils::get_test_state};

    fn test_server() -> TestServer {
        TestServer::new(build_router(get_test_state()))
    }

    async fn sign_up_and_log_in(server: &TestServer, email: &str) -> String {
        let credentials = json!({ "email": email, "password": "averagepassword" });

        server.post(endpoints::SIGN_UP).json(&credentials).await;
        let response = server.post(endpoints::LOG_IN).json(&credentials).await;
        let body: Value = response.json();

        body["values"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn requests_without_a_token_are_rejected() {
        let server = test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["apiStatus"], "FAILURE");
        assert_eq!(body["apiMessage"], "Not authenticated");
    }

    #[tokio::test]
    async fn transaction_lifecycle_over_http() {
        let server = test_server();
        let token_a = sign_up_and_log_in(&server, "usera@example.com").await;
        let token_b = sign_up_and_log_in(&server, "userb@example.com").await;

        // User A creates an account and a transaction on it.
        let response = server
            .post(endpoints::ACCOUNTS)
            .authorization_bearer(&token_a)
            .json(&json!({ "name": "Checking" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let account: Value = response.json();
        let account_id = account["values"]["_id"].as_i64().unwrap();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .authorization_bearer(&token_a)
            .json(&json!({
                "date": "02-25-2019",
                "accountName": account_id.to_string(),
                "description": "groceries",
                "categoryParent": "Food",
                "categoryChild": "Supermarket",
                "amount": "10.00",
                "transactionType": "debit",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["apiMessage"], "Transaction created");
        let transaction_id = created["values"]["_id"].as_i64().unwrap();

        // User B may not edit it.
        let edit = json!({
            "_id": transaction_id,
            "date": "02-25-2019",
            "accountName": account_id.to_string(),
            "description": "groceries",
            "categoryParent": "Food",
            "categoryChild": "Supermarket",
            "amount": "20.0",
            "transactionType": "debit",
        });
        let response = server
            .put(endpoints::TRANSACTIONS)
            .authorization_bearer(&token_b)
            .json(&edit)
            .await;
        response.assert_status(axum::http::StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["apiMessage"], "Not authorized");
        assert_eq!(body["errorCode"], 3);

        // User A may, and the amount is canonicalized.
        let response = server
            .put(endpoints::TRANSACTIONS)
            .authorization_bearer(&token_a)
            .json(&edit)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["apiMessage"], "Transaction updated");

        let response = server
            .get(endpoints::TRANSACTIONS)
            .authorization_bearer(&token_a)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["apiMessage"], "Transactions retrieved");
        let records = body["values"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["amount"], "20.00");

        // User B sees none of it.
        let response = server
            .get(endpoints::TRANSACTIONS)
            .authorization_bearer(&token_b)
            .await;
        let body: Value = response.json();
        assert_eq!(body["values"], json!([]));
    }

    #[tokio::test]
    async fn deleting_an_account_cascades_to_its_transactions() {
        let server = test_server();
        let token = sign_up_and_log_in(&server, "usera@example.com").await;

        let response = server
            .post(endpoints::ACCOUNTS)
            .authorization_bearer(&token)
            .json(&json!({ "name": "Checking" }))
            .await;
        let account: Value = response.json();
        let account_id = account["values"]["_id"].as_i64().unwrap();

        server
            .post(endpoints::TRANSACTIONS)
            .authorization_bearer(&token)
            .json(&json!({
                "date": "02-25-2019",
                "accountName": account_id.to_string(),
                "description": "groceries",
                "categoryParent": "Food",
                "categoryChild": "Supermarket",
                "amount": "10.00",
                "transactionType": "debit",
            }))
            .await;

        let response = server
            .delete(&format!("/accounts/{account_id}"))
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["apiMessage"], "Account deleted");

        let response = server
            .get(endpoints::TRANSACTIONS)
            .authorization_bearer(&token)
            .await;
        let body: Value = response.json();
        assert_eq!(body["values"], json!([]));
    }
}
