//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AccountDeletion, AppState, Error,
    auth::{AuthenticatedUser, authorize_owner},
    envelope::{Envelope, error_code},
    models::AccountId,
    stores::{AccountStore, TransactionStore, UserStore},
};

/// A route handler for deleting an account.
///
/// What happens to the account's transactions is decided by the configured
/// [AccountDeletion] policy: `Cascade` deletes them along with the account,
/// `Restrict` refuses with a conflict while any remain.
pub async fn delete_account<T, A, U>(
    State(state): State<AppState<T, A, U>>,
    AuthenticatedUser(requester): AuthenticatedUser,
    Path(account_id): Path<AccountId>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let stored = match state.account_store.get(account_id) {
        Ok(account) => account,
        Err(Error::NotFound) => {
            return Envelope::failure("Could not find account", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            tracing::error!("could not look up account: {error}");
            return unable_to_delete();
        }
    };

    if authorize_owner(requester, stored.user_id).is_err() {
        return Envelope::failure("Not authorized", error_code::NOT_AUTHORIZED)
            .into_response_with(StatusCode::FORBIDDEN);
    }

    match state.account_deletion {
        AccountDeletion::Restrict => {
            match state.transaction_store.count_by_account(account_id) {
                Ok(0) => {}
                Ok(_) => {
                    return Envelope::failure(
                        "Account still has transactions",
                        error_code::CONFLICT,
                    )
                    .into_response_with(StatusCode::CONFLICT);
                }
                Err(error) => {
                    tracing::error!("could not count transactions: {error}");
                    return unable_to_delete();
                }
            }
        }
        AccountDeletion::Cascade => {
            if let Err(error) = state.transaction_store.delete_by_account(account_id) {
                tracing::error!("could not delete transactions: {error}");
                return unable_to_delete();
            }
        }
    }

    match state.account_store.delete(account_id) {
        Ok(()) => Envelope::success("Account deleted").into_response_with(StatusCode::OK),
        Err(Error::NotFound) => {
            Envelope::failure("Could not find account", error_code::NOT_FOUND)
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Err(error) => {
            tracing::error!("could not delete account: {error}");
            unable_to_delete()
        }
    }
}

fn unable_to_delete() -> Response {
    Envelope::failure("Unable to delete account", error_code::MUTATION_FAILED)
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
