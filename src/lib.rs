//! Palladium is a REST API for managing your personal finances: bank
//! accounts and the transactions recorded against them.
//!
//! Every endpoint responds with the same JSON envelope
//! (`{ apiStatus, apiMessage, errorCode, values? }`), authenticates
//! requesters with bearer tokens, and only ever lets a user see or change
//! their own records.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod account;
pub mod auth;
pub mod db;
pub mod endpoints;
pub mod envelope;
mod error;
pub mod models;
mod routing;
mod state;
pub mod stores;
#[cfg(test)]
mod test_utils;
pub mod transaction;

pub use error::Error;
pub use routing::build_router;
pub use state::{AccountDeletion, AppState, AuthKeys, SqliteAppState};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
